//! Template classification and placeholder substitution.
//!
//! A label is a template when a sentinel-delimited placeholder sits inside
//! surrounding prose:
//!
//! ```text
//! This medicine is not $VAR$. For full details on our returns policies
//! ```
//!
//! A label that starts *and* ends with the sentinel (`$CTA$`) is not a
//! template even if it holds several placeholders; it renders through the
//! plain path instead.

use crate::content::{ContentModifier, ModifierKind, find_by_kind};
use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_log};
use crate::text::resolve::resolve_style;
use crate::text::segment::{Segment, SegmentBuilder};

/// Placeholder delimiter used unless configured otherwise.
pub const DEFAULT_SENTINEL: char = '$';

/// Whether `label` is a template, using the default sentinel.
#[must_use]
pub fn is_template(label: &str) -> bool {
    is_template_with(label, DEFAULT_SENTINEL)
}

/// Whether `label` is a template for the given sentinel.
///
/// True when the sentinel occurs and the label is not wrapped by it at both
/// ends.
#[must_use]
pub fn is_template_with(label: &str, sentinel: char) -> bool {
    label.contains(sentinel) && !(label.starts_with(sentinel) && label.ends_with(sentinel))
}

/// Substitute the placeholder and split the label around the styled fragment.
///
/// The fragment is the last modifier's display text; the token replaced is the
/// first modifier's identifier (first occurrence only, matched literally).
/// Segments come out left to right: the text before the fragment, the
/// actionable fragment styled by every modifier, the text after it. Empty
/// surrounding fragments are left out.
///
/// The fragment binds the press action of the first `link` modifier.
///
/// # Errors
///
/// [`Error::InvalidContent`] when modifiers are present but `label` is empty.
pub fn substitute(label: &str, modifiers: &[ContentModifier]) -> Result<Vec<Segment>> {
    substitute_with(label, modifiers, false)
}

pub(crate) fn substitute_with(
    label: &str,
    modifiers: &[ContentModifier],
    keep_empty_fragments: bool,
) -> Result<Vec<Segment>> {
    let mut builder = SegmentBuilder::new();

    let (Some(first), Some(last)) = (modifiers.first(), modifiers.last()) else {
        builder.push_plain(label);
        return Ok(builder.finish());
    };

    if label.is_empty() {
        return Err(Error::invalid_content(
            "template label is empty but modifiers are present",
        ));
    }

    let fragment = last.display_text.as_str();
    let token = first.identifier.as_str();

    let resolved = if !token.is_empty() && label.contains(token) {
        label.replacen(token, fragment, 1)
    } else {
        emit_log(
            LogLevel::Warn,
            &format!("placeholder {token:?} not found in label {label:?}"),
        );
        label.to_string()
    };

    let style = resolve_style(modifiers, None);
    let action = find_by_kind(modifiers, &ModifierKind::Link)
        .and_then(ContentModifier::press_action)
        .cloned();

    match resolved.split_once(fragment) {
        None => {
            builder.push(fragment, Some(style), true, action);
        }
        Some((before, after)) => {
            if keep_empty_fragments || !before.is_empty() {
                builder.push_plain(before);
            }
            builder.push(fragment, Some(style), true, action);
            if keep_empty_fragments || !after.is_empty() {
                builder.push_plain(after);
            }
        }
    }

    Ok(builder.finish())
}
