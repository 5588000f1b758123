#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok((label, payload)) = dertree::pem::strip(text) {
            // Wrapping normalizes layout; stripping again must agree.
            let rewrapped = dertree::pem::wrap(&label, &payload);
            assert_eq!(dertree::pem::strip(&rewrapped), Ok((label, payload)));
        }
    }
});
