//! Fuzz target for line parsing
//!
//! Feeds arbitrary input to the parser and to the serializer of whatever
//! it produces, ensuring neither panics.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::str;

fuzz_target!(|data: &[u8]| {
    // Only fuzz valid UTF-8 strings to focus on protocol-level issues
    if let Ok(input) = str::from_utf8(data) {
        // Skip very long inputs (over 512 bytes is unusual for IRC)
        if input.len() > 512 {
            return;
        }

        // Parsing must never panic; serializing a parsed message must not
        // panic either (it may legitimately error)
        if let Ok(message) = ircwire::parse(input) {
            let _ = ircwire::stringify(&message);
        }
    }
});
