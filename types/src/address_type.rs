//! Address type labels produced by classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of Bitcoin address a string was classified as.
///
/// Every classification terminates in exactly one of these seven labels.
/// Malformed input of any kind maps to [`AddressType::Invalid`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressType {
    /// Base58Check address starting with `1`.
    #[serde(rename = "Legacy P2PKH")]
    LegacyP2pkh,
    /// Base58Check address starting with `3`.
    #[serde(rename = "P2SH")]
    P2sh,
    /// Bech32 address starting with `bc1q`.
    #[serde(rename = "Native SegWit bech32")]
    NativeSegwit,
    /// Bech32m address starting with `bc1p`.
    #[serde(rename = "Taproot bech32m")]
    Taproot,
    /// Valid bech32 checksum under `bc1` but not `bc1q`.
    #[serde(rename = "Unknown bech32")]
    UnknownBech32,
    /// Valid bech32m checksum under `bc1` but not `bc1p`.
    #[serde(rename = "Unknown bech32m")]
    UnknownBech32m,
    /// Anything that fails prefix dispatch, decoding, or checksum verification.
    #[serde(rename = "Invalid")]
    Invalid,
}

impl AddressType {
    /// All seven labels, in declaration order.
    pub const ALL: [AddressType; 7] = [
        Self::LegacyP2pkh,
        Self::P2sh,
        Self::NativeSegwit,
        Self::Taproot,
        Self::UnknownBech32,
        Self::UnknownBech32m,
        Self::Invalid,
    ];

    /// Human-readable label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LegacyP2pkh => "Legacy P2PKH",
            Self::P2sh => "P2SH",
            Self::NativeSegwit => "Native SegWit bech32",
            Self::Taproot => "Taproot bech32m",
            Self::UnknownBech32 => "Unknown bech32",
            Self::UnknownBech32m => "Unknown bech32m",
            Self::Invalid => "Invalid",
        }
    }

    /// Whether the address passed checksum verification.
    pub fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid)
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
