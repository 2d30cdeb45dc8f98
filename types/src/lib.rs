//! Fundamental types for addrcheck.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! the closed set of address type labels and the error taxonomy reported by the
//! checksum codecs.

pub mod address_type;
pub mod error;

pub use address_type::AddressType;
pub use error::{CodecError, Malformed};
