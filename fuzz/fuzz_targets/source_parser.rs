//! Fuzz target for source prefix parsing
//!
//! Source parsing must never panic, and an accepted source must reassemble
//! to the exact input string.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::str;

use ircwire::Source;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = str::from_utf8(data) {
        if input.len() > 512 {
            return;
        }

        if let Ok(source) = Source::parse(input) {
            assert_eq!(source.to_string(), input);
        }
    }
});
