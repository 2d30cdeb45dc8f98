#![no_main]

use libfuzzer_sys::fuzz_target;

use addrcheck_crypto::base58;

// Decoding arbitrary strings never panics, and a successful checksum check
// always strips exactly four bytes.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    let decoded = base58::decode(s);
    if let Ok(body) = base58::check(s) {
        let full = decoded.expect("check succeeded so decode must too");
        assert_eq!(body.len() + 4, full.len());
        assert_eq!(body[..], full[..body.len()]);
    }
});
