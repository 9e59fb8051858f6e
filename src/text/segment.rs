//! Styled text segments for rendered labels.

use crate::content::Action;
use crate::style::Style;
use crate::unicode::{WidthMethod, char_offset_at_column, display_width_with_method};
use serde::Serialize;
use std::ops::Range;

/// A piece of rendered text with its style and tap binding.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// The text content.
    pub text: String,
    /// Byte range in the rendered text.
    pub range: Range<usize>,
    /// Character range in the rendered text; tap offsets index into this.
    pub char_range: Range<usize>,
    /// Style override (`None` = surface default).
    pub style: Option<Style>,
    /// Whether this segment is annotated as tappable.
    pub actionable: bool,
    /// Action fired on tap. May be absent even when `actionable` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
}

impl Segment {
    /// Check if this segment contains a character offset.
    #[must_use]
    pub fn contains(&self, char_offset: usize) -> bool {
        self.char_range.contains(&char_offset)
    }

    /// Get the length in characters.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.char_range.end - self.char_range.start
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Appends segments left to right, tracking byte and character offsets.
#[derive(Clone, Debug, Default)]
pub struct SegmentBuilder {
    segments: Vec<Segment>,
    byte_offset: usize,
    char_offset: usize,
}

impl SegmentBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a segment.
    pub fn push(
        &mut self,
        text: &str,
        style: Option<Style>,
        actionable: bool,
        action: Option<Action>,
    ) -> &mut Self {
        let chars = text.chars().count();
        self.segments.push(Segment {
            text: text.to_string(),
            range: self.byte_offset..self.byte_offset + text.len(),
            char_range: self.char_offset..self.char_offset + chars,
            style,
            actionable,
            action,
        });
        self.byte_offset += text.len();
        self.char_offset += chars;
        self
    }

    /// Append an unstyled, non-actionable segment.
    pub fn push_plain(&mut self, text: &str) -> &mut Self {
        self.push(text, None, false, None)
    }

    /// Finish and return the segments.
    #[must_use]
    pub fn finish(self) -> Vec<Segment> {
        self.segments
    }
}

/// Which path produced a [`RenderedText`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderPath {
    /// Single run: raw label or the last modifier's display text.
    Plain,
    /// Placeholder substituted and split around the styled fragment.
    Rich,
    /// Content was invalid; nothing to show.
    Placeholder,
}

/// Output of one render pass over a content item.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedText {
    /// Path taken.
    pub path: RenderPath,
    /// Segments in left-to-right order.
    pub segments: Vec<Segment>,
    /// Surface style for text without an override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_style: Option<Style>,
    /// Whole-item press action, for surfaces that make the entire run clickable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_action: Option<Action>,
}

impl RenderedText {
    /// Rendered output with no text.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            path: RenderPath::Placeholder,
            segments: Vec::new(),
            base_style: None,
            item_action: None,
        }
    }

    /// Concatenated text of all segments.
    #[must_use]
    pub fn text(&self) -> String {
        self.segments.iter().map(|seg| seg.text.as_str()).collect()
    }

    /// Total length in characters.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.segments.last().map_or(0, |seg| seg.char_range.end)
    }

    /// Check if there is no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(Segment::is_empty)
    }

    /// Segment containing a character offset.
    #[must_use]
    pub fn segment_at(&self, char_offset: usize) -> Option<&Segment> {
        self.segments.iter().find(|seg| seg.contains(char_offset))
    }

    /// The segment annotated as actionable, if any.
    #[must_use]
    pub fn actionable_segment(&self) -> Option<&Segment> {
        self.segments.iter().find(|seg| seg.actionable)
    }

    /// Style to draw a segment with: the base style under the segment's own.
    #[must_use]
    pub fn effective_style(&self, segment: &Segment) -> Style {
        self.base_style
            .unwrap_or_default()
            .merge(segment.style.unwrap_or_default())
    }

    /// Display width of the whole text in columns.
    #[must_use]
    pub fn display_width(&self) -> usize {
        self.display_width_with(WidthMethod::default())
    }

    #[must_use]
    pub fn display_width_with(&self, method: WidthMethod) -> usize {
        self.segments
            .iter()
            .map(|seg| display_width_with_method(&seg.text, method))
            .sum()
    }

    /// Character offset under a display column, for surfaces that report
    /// taps in columns. `None` past the end of the text.
    #[must_use]
    pub fn char_offset_at_column(&self, column: usize) -> Option<usize> {
        self.char_offset_at_column_with(column, WidthMethod::default())
    }

    #[must_use]
    pub fn char_offset_at_column_with(&self, column: usize, method: WidthMethod) -> Option<usize> {
        char_offset_at_column(&self.text(), column, method)
    }
}
