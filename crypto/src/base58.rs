//! Base58Check decoding and checksum verification.
//!
//! Layout of a decoded Base58Check string: `body || checksum`, where the
//! checksum is the first 4 bytes of SHA-256(SHA-256(body)). For Bitcoin
//! addresses the body is a version byte followed by a 20-byte hash.
//!
//! Alphabet: `123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz`
//! (no `0`, `O`, `I` or `l`). Each leading `1` encodes one leading zero byte.

use addrcheck_types::{CodecError, Malformed};

use crate::hash::sha256d;

/// Base58 alphabet (58 chars, avoids visually ambiguous 0/O and I/l).
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Reverse lookup table: ASCII byte → digit value (0xFF = invalid).
const DECODE: [u8; 128] = {
    let mut table = [0xFFu8; 128];
    let mut i = 0;
    while i < 58 {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Number of trailing checksum bytes.
pub const CHECKSUM_LEN: usize = 4;

/// Map a character to its Base58 digit value.
fn digit(ch: char) -> Option<u8> {
    if !ch.is_ascii() {
        return None;
    }
    match DECODE[ch as usize] {
        0xFF => None,
        v => Some(v),
    }
}

/// Decode a Base58 string into bytes.
///
/// The string is read as a big-endian base-58 number and converted to its
/// minimal big-endian byte form, then one zero byte is prepended for every
/// leading `1`. There is no upper bound on the length of the input.
pub fn decode(s: &str) -> Result<Vec<u8>, CodecError> {
    // Accumulator holds the number least-significant byte first so that
    // growing it is a push rather than an insert.
    let mut acc: Vec<u8> = Vec::with_capacity(s.len());

    for (position, ch) in s.chars().enumerate() {
        let value = digit(ch).ok_or(CodecError::InvalidCharacter { ch, position })?;

        let mut carry = u32::from(value);
        for byte in acc.iter_mut() {
            carry += u32::from(*byte) * 58;
            *byte = carry as u8;
            carry >>= 8;
        }
        while carry > 0 {
            acc.push(carry as u8);
            carry >>= 8;
        }
    }

    let leading_zeros = s.bytes().take_while(|&b| b == ALPHABET[0]).count();
    let mut out = vec![0u8; leading_zeros];
    out.extend(acc.iter().rev());
    Ok(out)
}

/// Decode `s` and verify its trailing double-SHA256 checksum.
///
/// Returns the body (everything before the 4 checksum bytes) on success.
pub fn check(s: &str) -> Result<Vec<u8>, CodecError> {
    let mut decoded = decode(s)?;
    if decoded.len() < CHECKSUM_LEN {
        return Err(Malformed::PayloadTooShort.into());
    }

    let body_len = decoded.len() - CHECKSUM_LEN;
    let digest = sha256d(&decoded[..body_len]);
    if digest[..CHECKSUM_LEN] != decoded[body_len..] {
        return Err(CodecError::ChecksumMismatch);
    }

    decoded.truncate(body_len);
    Ok(decoded)
}

/// Whether `s` is a well-formed Base58Check string with a matching checksum.
pub fn verify(s: &str) -> bool {
    check(s).is_ok()
}
