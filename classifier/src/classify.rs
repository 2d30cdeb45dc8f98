//! Prefix dispatch and sub-classification.
//!
//! | Prefix                 | Codec        | Label on success                          |
//! |------------------------|--------------|-------------------------------------------|
//! | `1`                    | Base58Check  | Legacy P2PKH                              |
//! | `3`                    | Base58Check  | P2SH                                      |
//! | `bc1` (any case)       | Bech32       | Native SegWit (`bc1q`) / Unknown bech32   |
//! | `bc1` (any case)       | Bech32m      | Taproot (`bc1p`) / Unknown bech32m        |
//!
//! Everything else, and every codec failure, is `Invalid`.

use addrcheck_crypto::{base58, bech32, Variant};
use addrcheck_types::AddressType;
use tracing::debug;

const SEGWIT_PREFIX: &str = "bc1";
const NATIVE_SEGWIT_PREFIX: &str = "bc1q";
const TAPROOT_PREFIX: &str = "bc1p";

/// Classify `address` as one of the seven [`AddressType`] labels.
pub fn validate(address: &str) -> AddressType {
    match address.as_bytes().first() {
        Some(b'1') | Some(b'3') => classify_base58(address),
        _ if has_prefix(address, SEGWIT_PREFIX) => classify_segwit(address),
        _ => {
            debug!(address, "no recognised prefix");
            AddressType::Invalid
        }
    }
}

fn classify_base58(address: &str) -> AddressType {
    match base58::check(address) {
        Ok(_) if address.starts_with('1') => AddressType::LegacyP2pkh,
        Ok(_) => AddressType::P2sh,
        Err(e) => {
            debug!(address, error = %e, "base58check rejected");
            AddressType::Invalid
        }
    }
}

fn classify_segwit(address: &str) -> AddressType {
    match bech32::classify(address) {
        Ok(Variant::Bech32) if has_prefix(address, NATIVE_SEGWIT_PREFIX) => {
            AddressType::NativeSegwit
        }
        Ok(Variant::Bech32) => AddressType::UnknownBech32,
        Ok(Variant::Bech32m) if has_prefix(address, TAPROOT_PREFIX) => AddressType::Taproot,
        Ok(Variant::Bech32m) => AddressType::UnknownBech32m,
        Err(e) => {
            debug!(address, error = %e, "bech32 rejected");
            AddressType::Invalid
        }
    }
}

/// ASCII case-insensitive prefix test.
fn has_prefix(address: &str, prefix: &str) -> bool {
    address
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
