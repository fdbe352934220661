//! Fuzz target for mask matching
//!
//! Splits the input into a pattern and a candidate and checks that
//! compilation and matching never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::str;

use ircwire::Mask;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = str::from_utf8(data) {
        if input.len() > 256 {
            return;
        }

        let (pattern, candidate) = match input.split_once('\n') {
            Some(parts) => parts,
            None => (input, input),
        };

        let mask = Mask::new(pattern);
        let _ = mask.test(candidate);
        // A pattern with no wildcards must match exactly itself
        if !pattern.contains('*') && !pattern.contains('?') {
            assert!(mask.test(pattern));
        }
    }
});
