#![no_main]

use libfuzzer_sys::fuzz_target;

use addrcheck_crypto::bech32;

// Splitting never panics; successful splits yield 5-bit values, a non-empty
// lowercase HRP, and at least six checksum values.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(parts) = bech32::split(s) {
        assert!(!parts.hrp.is_empty());
        assert_eq!(parts.hrp, parts.hrp.to_ascii_lowercase());
        assert!(parts.data.len() >= 6);
        assert!(parts.data.iter().all(|&v| v < 32));

        let m = bech32::verify_bech32m(&parts.hrp, &parts.data);
        let b = bech32::verify_bech32(&parts.hrp, &parts.data);
        assert!(!(m && b));
    }
});
