//! Error taxonomy shared by the checksum codecs.

use thiserror::Error;

/// Why a codec rejected its input.
///
/// All variants collapse to the same outcome for callers of the classifier;
/// the distinction exists so codec behaviour can be tested precisely.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("invalid character {ch:?} at position {position}")]
    InvalidCharacter { ch: char, position: usize },

    #[error("malformed input: {0}")]
    Malformed(Malformed),

    #[error("checksum mismatch")]
    ChecksumMismatch,
}

/// Structural problems detected before any checksum is computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Malformed {
    #[error("mixed-case string")]
    MixedCase,

    #[error("missing separator")]
    MissingSeparator,

    #[error("empty human-readable part")]
    EmptyHrp,

    #[error("data part shorter than the checksum")]
    ChecksumTooShort,

    #[error("decoded payload shorter than the checksum")]
    PayloadTooShort,
}

impl From<Malformed> for CodecError {
    fn from(m: Malformed) -> Self {
        Self::Malformed(m)
    }
}
