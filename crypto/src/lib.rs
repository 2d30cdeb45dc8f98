//! Checksum-verifying codecs for Bitcoin address strings.
//!
//! - **Base58Check** for legacy `1...` and `3...` addresses (double-SHA256 checksum)
//! - **Bech32 / Bech32m** for `bc1...` SegWit addresses (BCH polynomial checksum)
//!
//! Every function here is a pure function of its input. Nothing is cached and
//! no state is shared, so callers may validate from as many threads as they like.

pub mod base58;
pub mod bech32;
pub mod hash;

pub use bech32::{Bech32Parts, Variant};
pub use hash::sha256d;
