//! Merging a modifier list into one effective style.

use crate::color::Rgba;
use crate::content::{ContentModifier, ModifierKind, find_by_kind};
use crate::event::{LogLevel, emit_log};
use crate::style::{FontWeight, Style, TextDecoration};

/// Resolve the style a modifier list applies on top of `base`.
///
/// Each attribute is looked up with first-match-by-kind and overrides the base
/// only when present:
///
/// - size: the first `size` modifier's `size`
/// - weight: bold when any `bold` modifier exists
/// - color: the first `color` modifier's color, parsed from hex
/// - decoration: underline if an `underline` modifier exists, otherwise
///   line-through if a `strikethrough` modifier exists
///
/// A color that does not parse leaves the base color in place.
#[must_use]
pub fn resolve_style(modifiers: &[ContentModifier], base: Option<Style>) -> Style {
    let base = base.unwrap_or(Style::NONE);

    let font_size = find_by_kind(modifiers, &ModifierKind::Size)
        .and_then(|modifier| modifier.size)
        .or(base.font_size);

    let font_weight = find_by_kind(modifiers, &ModifierKind::Bold)
        .map(|_| FontWeight::BOLD)
        .or(base.font_weight);

    let color = find_by_kind(modifiers, &ModifierKind::Color)
        .and_then(|modifier| modifier.color.as_deref())
        .and_then(parse_color)
        .or(base.color);

    let decoration = if find_by_kind(modifiers, &ModifierKind::Underline).is_some() {
        Some(TextDecoration::UNDERLINE)
    } else if find_by_kind(modifiers, &ModifierKind::Strikethrough).is_some() {
        Some(TextDecoration::LINE_THROUGH)
    } else {
        base.decoration
    };

    Style {
        font_size,
        font_weight,
        color,
        decoration,
    }
}

fn parse_color(text: &str) -> Option<Rgba> {
    let parsed = Rgba::from_hex(text);
    if parsed.is_none() {
        emit_log(
            LogLevel::Warn,
            &format!("ignoring unparseable modifier color {text:?}"),
        );
    }
    parsed
}
