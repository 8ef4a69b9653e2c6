#![no_main]
use libfuzzer_sys::fuzz_target;

use safenbt::{from_bytes_unlimited, to_bytes, Compound};

fuzz_target!(|root: Compound| {
    // Strings past 65535 bytes cannot be encoded.
    let bs = match to_bytes(&root) {
        Ok(bs) => bs,
        Err(_) => return,
    };

    // Trees nested past the depth ceiling are refused.
    if let Ok(decoded) = from_bytes_unlimited(&bs) {
        assert_eq!(root, decoded);
    }
});
