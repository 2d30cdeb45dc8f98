//! Bech32 and Bech32m checksum verification (BIP-173 / BIP-350).
//!
//! String format: `hrp` + `1` + data characters, where the last 6 data
//! characters are the checksum. The separator is the *last* `1` in the string,
//! so the human-readable part may itself contain `1`s.
//!
//! Both variants share the same BCH polynomial; they differ only in the
//! constant the residue must equal.

use addrcheck_types::{CodecError, Malformed};

/// Bech32 data charset (32 chars, one per 5-bit value).
pub const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Reverse lookup table: ASCII byte → 5-bit value (0xFF = invalid).
const CHARSET_REV: [u8; 128] = {
    let mut table = [0xFFu8; 128];
    let mut i = 0;
    while i < 32 {
        table[CHARSET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Generator constants of the checksum polynomial.
const GENERATORS: [u32; 5] = [0x3b6a57b2, 0x26508e6d, 0x1ea119fa, 0x3d4233dd, 0x2a1462b3];

/// Separator between the human-readable part and the data part.
pub const SEPARATOR: char = '1';

/// Number of checksum characters at the end of the data part.
pub const CHECKSUM_LEN: usize = 6;

/// Which checksum constant a string satisfies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// BIP-173, used by witness version 0.
    Bech32,
    /// BIP-350, used by witness versions 1 and above.
    Bech32m,
}

impl Variant {
    /// The value `polymod` must produce for a valid checksum.
    pub const fn constant(self) -> u32 {
        match self {
            Self::Bech32 => 1,
            Self::Bech32m => 0x2bc8_30a3,
        }
    }

    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bech32 => "bech32",
            Self::Bech32m => "bech32m",
        }
    }
}

/// A string split at its separator, with the data part mapped to 5-bit values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bech32Parts {
    /// Lowercased human-readable part.
    pub hrp: String,
    /// 5-bit values of every data character, checksum included.
    pub data: Vec<u8>,
}

/// Split `address` into its human-readable part and 5-bit data values.
///
/// Total length and HRP length are not bounded here; only what is needed to
/// locate a 6-character checksum is enforced.
pub fn split(address: &str) -> Result<Bech32Parts, CodecError> {
    if let Some((position, ch)) = address
        .chars()
        .enumerate()
        .find(|(_, ch)| !(33..=126).contains(&u32::from(*ch)))
    {
        return Err(CodecError::InvalidCharacter { ch, position });
    }

    // Only printable ASCII from here on, so byte offsets are char offsets.
    let has_lower = address.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = address.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(Malformed::MixedCase.into());
    }

    let address = address.to_ascii_lowercase();
    let pos = address.rfind(SEPARATOR).ok_or(Malformed::MissingSeparator)?;
    if pos == 0 {
        return Err(Malformed::EmptyHrp.into());
    }
    if pos + 1 + CHECKSUM_LEN > address.len() {
        return Err(Malformed::ChecksumTooShort.into());
    }

    let data = address[pos + 1..]
        .bytes()
        .enumerate()
        .map(|(i, b)| match CHARSET_REV[b as usize] {
            0xFF => Err(CodecError::InvalidCharacter {
                ch: b as char,
                position: pos + 1 + i,
            }),
            v => Ok(v),
        })
        .collect::<Result<Vec<u8>, _>>()?;

    Ok(Bech32Parts {
        hrp: address[..pos].to_string(),
        data,
    })
}

/// Expand the human-readable part for checksum computation:
/// high 3 bits of each char, a zero, then low 5 bits of each char.
pub fn expand(hrp: &str) -> Vec<u8> {
    let bytes = hrp.as_bytes();
    let mut out = Vec::with_capacity(bytes.len() * 2 + 1);
    out.extend(bytes.iter().map(|b| b >> 5));
    out.push(0);
    out.extend(bytes.iter().map(|b| b & 0x1f));
    out
}

/// BCH checksum polynomial over GF(32), shared by both variants.
pub fn polymod(values: &[u8]) -> u32 {
    let mut chk: u32 = 1;
    for &v in values {
        let top = chk >> 25;
        chk = ((chk & 0x1ff_ffff) << 5) ^ u32::from(v);
        for (i, generator) in GENERATORS.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= generator;
            }
        }
    }
    chk
}

/// Polymod residue of `expand(hrp) || data`.
fn residue(hrp: &str, data: &[u8]) -> u32 {
    let mut values = expand(hrp);
    values.extend_from_slice(data);
    polymod(&values)
}

/// Whether `(hrp, data)` carries a valid checksum of the given variant.
pub fn verify(hrp: &str, data: &[u8], variant: Variant) -> bool {
    residue(hrp, data) == variant.constant()
}

/// Whether `(hrp, data)` carries a valid Bech32 checksum.
pub fn verify_bech32(hrp: &str, data: &[u8]) -> bool {
    verify(hrp, data, Variant::Bech32)
}

/// Whether `(hrp, data)` carries a valid Bech32m checksum.
pub fn verify_bech32m(hrp: &str, data: &[u8]) -> bool {
    verify(hrp, data, Variant::Bech32m)
}

/// Split `address` and report which checksum variant it satisfies.
///
/// Bech32 is tried before Bech32m. A residue cannot equal both constants, so
/// at most one variant ever matches.
pub fn classify(address: &str) -> Result<Variant, CodecError> {
    let parts = split(address)?;
    let residue = residue(&parts.hrp, &parts.data);
    [Variant::Bech32, Variant::Bech32m]
        .into_iter()
        .find(|variant| variant.constant() == residue)
        .ok_or(CodecError::ChecksumMismatch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_bc() {
        assert_eq!(expand("bc"), vec![3, 3, 0, 2, 3]);
    }

    #[test]
    fn polymod_of_nothing_is_initial_state() {
        assert_eq!(polymod(&[]), 1);
    }

    #[test]
    fn bip173_checksum_vectors() {
        for s in [
            "A12UEL5L",
            "a12uel5l",
            "abcdef1qpzry9x8gf2tvdw0s3jn54khce6mua7lmqqqxw",
            "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4",
            "BC1QW508D6QEJXTDG4Y5R3ZARVARY0C5XW7KV8F3T4",
            "bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh",
        ] {
            assert_eq!(classify(s), Ok(Variant::Bech32), "{s}");
        }
    }

    #[test]
    fn bip350_checksum_vectors() {
        for s in [
            "A1LQFN3A",
            "a1lqfn3a",
            "abcdef1l7aum6echk45nj3s0wdvt2fg8x9yrzpqzd3ryx",
            "bc1p0xlxvlhemja6c4dqv22uapctqupfhlxm9h8z3k2e72q4k9hcz7vqzk5jj0",
        ] {
            assert_eq!(classify(s), Ok(Variant::Bech32m), "{s}");
        }
    }

    #[test]
    fn split_lowercases_and_maps_values() {
        let parts = split("A12UEL5L").unwrap();
        assert_eq!(parts.hrp, "a");
        assert_eq!(parts.data.len(), 6);
        // 'q' is value 0, 'l' is value 31.
        let parts = split("x1qqqqqqql").unwrap();
        assert_eq!(parts.data, vec![0, 0, 0, 0, 0, 0, 0, 31]);
    }

    #[test]
    fn split_uses_last_separator() {
        let parts = split("a1b1qqqqqq").unwrap();
        assert_eq!(parts.hrp, "a1b");
        assert_eq!(parts.data, vec![0; 6]);
    }

    #[test]
    fn split_rejects_out_of_range_characters() {
        assert_eq!(
            split(" 1nwldj5"),
            Err(CodecError::InvalidCharacter { ch: ' ', position: 0 })
        );
        assert!(matches!(
            split("bc1q\u{7f}qqqqqq"),
            Err(CodecError::InvalidCharacter { position: 4, .. })
        ));
        assert!(matches!(
            split("bc1qé"),
            Err(CodecError::InvalidCharacter { ch: 'é', .. })
        ));
    }

    #[test]
    fn split_rejects_mixed_case() {
        assert_eq!(
            split("bC1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh"),
            Err(Malformed::MixedCase.into())
        );
    }

    #[test]
    fn split_structural_errors() {
        assert_eq!(split("pzry9x0s0muk"), Err(Malformed::MissingSeparator.into()));
        assert_eq!(split("1pzry9x0s0muk"), Err(Malformed::EmptyHrp.into()));
        assert_eq!(split("li1dgmt3"), Err(Malformed::ChecksumTooShort.into()));
        assert_eq!(split(""), Err(Malformed::MissingSeparator.into()));
    }

    #[test]
    fn split_rejects_characters_outside_charset() {
        assert_eq!(
            split("x1b4n0q5v"),
            Err(CodecError::InvalidCharacter { ch: 'b', position: 2 })
        );
    }

    #[test]
    fn altered_character_fails_checksum() {
        let good = "bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh";
        let bad = good.replacen("xy2", "xy3", 1);
        assert_eq!(classify(&bad), Err(CodecError::ChecksumMismatch));
    }

    #[test]
    fn variant_constants() {
        assert_eq!(Variant::Bech32.constant(), 1);
        assert_eq!(Variant::Bech32m.constant(), 0x2bc830a3);
        assert_eq!(Variant::Bech32m.as_str(), "bech32m");
    }
}
