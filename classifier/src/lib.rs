//! Bitcoin address classification.
//!
//! Dispatches an address string to the Base58Check or Bech32 codec by its
//! leading characters, then maps the codec outcome and finer prefix to an
//! [`AddressType`](addrcheck_types::AddressType).

pub mod batch;
pub mod classify;
pub mod report;

pub use batch::{report_batch, validate_batch};
pub use classify::validate;
pub use report::Report;
