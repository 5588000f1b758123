#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(parsed) = dertree::decode(data) {
        assert_eq!(parsed.to_der(), data);
    }
});
