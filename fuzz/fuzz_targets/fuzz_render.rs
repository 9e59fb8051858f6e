//! Fuzz target for rendering arbitrary labels and modifier lists.
//!
//! Rendering must never panic, segments must tile the text, and taps past
//! the end must resolve to nothing.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use richlabel::{Action, ContentItem, ContentModifier, Interaction, RenderOptions, Renderer};

#[derive(Arbitrary, Debug)]
struct FuzzModifier {
    kind: u8,
    identifier: String,
    display_text: String,
    color: Option<String>,
    size: Option<f32>,
    linked: bool,
}

#[derive(Arbitrary, Debug)]
struct FuzzItem {
    label: Option<String>,
    modifiers: Vec<FuzzModifier>,
    sentinel: char,
    keep_empty: bool,
    item_action: bool,
}

const KINDS: [&str; 7] = ["bold", "size", "color", "underline", "strikethrough", "link", "other"];

fuzz_target!(|input: FuzzItem| {
    let modifiers = input.modifiers.into_iter().map(|m| {
        let mut modifier = ContentModifier::new(
            KINDS[usize::from(m.kind) % KINDS.len()],
            m.identifier,
            m.display_text,
        );
        modifier.color = m.color;
        modifier.size = m.size;
        if m.linked {
            modifier.interaction = Some(Interaction::on_press(Action::show_toast("fuzz")));
        }
        modifier
    });

    let mut item = ContentItem::new("text").with_modifiers(modifiers);
    item.label = input.label;
    if input.item_action {
        item = item.with_interaction(Interaction::on_press(Action::new("on_cart_clicked")));
    }

    let renderer = Renderer::new(
        RenderOptions::default()
            .sentinel(input.sentinel)
            .keep_empty_fragments(input.keep_empty),
    );
    let _ = item.validate(renderer.options());

    if let Ok(rendered) = renderer.render(&item) {
        let mut chars = 0;
        for segment in &rendered.segments {
            assert_eq!(segment.char_range.start, chars);
            chars = segment.char_range.end;
        }
        assert_eq!(rendered.len_chars(), rendered.text().chars().count());
        assert!(rendered.resolve_tap(rendered.len_chars()).is_none());
        let _ = rendered.resolve_tap_at_column(rendered.display_width() / 2);
    }
});
