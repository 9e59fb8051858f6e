//! Fuzz target for color hex parsing.
//!
//! Rgba::from_hex must return None for bad input, never panic, and whatever
//! it accepts must print back to a hex string it accepts again.

#![no_main]

use libfuzzer_sys::fuzz_target;
use richlabel::Rgba;

fuzz_target!(|data: &str| {
    if let Some(color) = Rgba::from_hex(data) {
        assert_eq!(Rgba::from_hex(&color.to_hex()), Some(color));
    }

    if !data.starts_with('#') {
        let _ = Rgba::from_hex(&format!("#{data}"));
    }

    // Char-boundary-safe prefixes and suffixes.
    for (i, _) in data.char_indices().take(10) {
        let _ = Rgba::from_hex(&data[i..]);
        let _ = Rgba::from_hex(&data[..i]);
    }
});
