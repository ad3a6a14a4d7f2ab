#![no_main]

use libfuzzer_sys::fuzz_target;
use moneroseed_core::Seed;

fuzz_target!(|data: &[u8]| {
    // Try parsing arbitrary bytes as a UTF-8 string, then as a 14-word
    // phrase. Seed::parse must never panic — always Ok or Err.
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = Seed::parse(s);
    }
});
