//! Test-side encoders for building strings with correct checksums.
//!
//! The crate itself never encodes; these exist so tests can produce valid
//! inputs. Shared with the classifier crate's tests.

#![allow(dead_code)]

use addrcheck_crypto::base58::ALPHABET;
use addrcheck_crypto::bech32::{self, Variant, CHARSET, CHECKSUM_LEN, SEPARATOR};
use addrcheck_crypto::sha256d;

/// Encode bytes as Base58, one leading `1` per leading zero byte.
pub fn base58_encode(bytes: &[u8]) -> String {
    let zeros = bytes.iter().take_while(|&&b| b == 0).count();
    // Base-58 digits, least significant first.
    let mut digits: Vec<u8> = Vec::new();
    for &byte in &bytes[zeros..] {
        let mut carry = u32::from(byte);
        for d in digits.iter_mut() {
            carry += u32::from(*d) << 8;
            *d = (carry % 58) as u8;
            carry /= 58;
        }
        while carry > 0 {
            digits.push((carry % 58) as u8);
            carry /= 58;
        }
    }
    let mut out = "1".repeat(zeros);
    out.extend(digits.iter().rev().map(|&d| ALPHABET[d as usize] as char));
    out
}

/// Base58Check-encode `body`.
pub fn base58check_encode(body: &[u8]) -> String {
    let mut bytes = body.to_vec();
    bytes.extend_from_slice(&sha256d(body)[..4]);
    base58_encode(&bytes)
}

/// Base58Check-encode `version || payload`.
pub fn base58check(version: u8, payload: &[u8]) -> String {
    let mut body = vec![version];
    body.extend_from_slice(payload);
    base58check_encode(&body)
}

/// Build `hrp1<data><checksum>` from raw 5-bit values.
pub fn bech32_encode(hrp: &str, data: &[u8], variant: Variant) -> String {
    let mut values = bech32::expand(hrp);
    values.extend_from_slice(data);
    values.extend([0u8; CHECKSUM_LEN]);
    let chk = bech32::polymod(&values) ^ variant.constant();

    let mut out = format!("{hrp}{SEPARATOR}");
    out.extend(data.iter().map(|&v| CHARSET[v as usize] as char));
    for i in 0..CHECKSUM_LEN {
        out.push(CHARSET[((chk >> (5 * (5 - i))) & 0x1f) as usize] as char);
    }
    out
}

/// Append a computed checksum to `hrp1payload`; `payload` must use the bech32 charset.
pub fn bech32_with_checksum(hrp: &str, payload: &str, variant: Variant) -> String {
    let data: Vec<u8> = payload
        .bytes()
        .map(|b| {
            CHARSET
                .iter()
                .position(|&c| c == b)
                .expect("payload outside bech32 charset") as u8
        })
        .collect();
    bech32_encode(hrp, &data, variant)
}
