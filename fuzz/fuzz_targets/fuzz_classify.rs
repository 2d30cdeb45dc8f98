#![no_main]

use libfuzzer_sys::fuzz_target;

use addrcheck_types::AddressType;

// Classification must terminate in one of the seven labels for any input,
// and batch classification must agree with single classification.
fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);
    let kind = addrcheck_classifier::validate(&s);
    assert!(AddressType::ALL.contains(&kind));

    let batch = addrcheck_classifier::validate_batch(&[s.as_ref()]);
    assert_eq!(batch, vec![kind]);
});
