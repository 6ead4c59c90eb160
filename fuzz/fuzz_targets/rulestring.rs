#![no_main]

use libfuzzer_sys::fuzz_target;
use petri_automata::Rule;

fuzz_target!(|data: &[u8]| {
    // Rulestring parsing should never panic on any input
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = s.parse::<Rule>();
    }
});
