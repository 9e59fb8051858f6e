//! Fuzz target for decoding content items from JSON.
//!
//! Arbitrary bytes must decode or fail cleanly; anything that decodes must
//! render or fail cleanly.

#![no_main]

use libfuzzer_sys::fuzz_target;
use richlabel::{ContentItem, Renderer};

fuzz_target!(|data: &str| {
    if let Ok(item) = ContentItem::from_json(data) {
        let rendered = Renderer::default().render_or_placeholder(&item);
        let _ = serde_json::to_string(&rendered);
    }
});
