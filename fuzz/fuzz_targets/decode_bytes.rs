#![no_main]
use libfuzzer_sys::fuzz_target;

use safenbt::{from_bytes, to_bytes, ReadLimiter};

fuzz_target!(|data: &[u8]| {
    let mut limiter = ReadLimiter::new(1024 * 1024);
    if let Ok(root) = from_bytes(data, &mut limiter) {
        // Anything decoded came from strings short enough to write back.
        let _bs = to_bytes(&root).unwrap();
    }
});
