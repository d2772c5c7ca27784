//! Fuzz target for hex color parsing.
//!
//! `Rgba::from_hex` must return `None` for bad input, never panic, and every
//! color it accepts must have components in [0, 1].

#![no_main]

use experience_panel::Rgba;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let candidates = [data.to_string(), format!("#{data}")];
    for candidate in &candidates {
        if let Some(color) = Rgba::from_hex(candidate) {
            for component in [color.r, color.g, color.b, color.a] {
                assert!((0.0..=1.0).contains(&component));
            }
        }
    }

    for (i, _) in data.char_indices().take(10) {
        let _ = Rgba::from_hex(&data[i..]);
        let _ = Rgba::from_hex(&data[..i]);
    }
});
