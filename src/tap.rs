//! Tap resolution: from a position in rendered text back to its action.
//!
//! Two ways in:
//!
//! - [`resolve_tap`] / [`RenderedText::resolve_tap`] search the segments
//!   directly by character offset.
//! - [`TapMap`] is a per-character lookup table of link ids for surfaces that
//!   register tappable ranges once and hit-test many times; ids resolve
//!   through a [`LinkPool`].

use crate::content::Action;
use crate::event::{EVENT_ACTION_RESOLVED, LogLevel, emit_event, emit_log};
use crate::link::LinkPool;
use crate::text::{RenderedText, Segment};

/// Action bound to the actionable segment containing `char_offset`.
///
/// Taps outside actionable segments, past the end of the text, or on an
/// actionable segment that has no action resolve to `None`.
#[must_use]
pub fn resolve_tap(segments: &[Segment], char_offset: usize) -> Option<&Action> {
    let segment = segments
        .iter()
        .find(|seg| seg.actionable && seg.contains(char_offset))?;

    match segment.action.as_ref() {
        Some(action) => {
            emit_event(EVENT_ACTION_RESOLVED, action.kind.as_str());
            Some(action)
        }
        None => {
            emit_log(
                LogLevel::Debug,
                &format!("tap on {:?} has no bound action", segment.text),
            );
            None
        }
    }
}

impl RenderedText {
    /// Action bound at a character offset.
    #[must_use]
    pub fn resolve_tap(&self, char_offset: usize) -> Option<&Action> {
        resolve_tap(&self.segments, char_offset)
    }

    /// Action bound at a display column.
    #[must_use]
    pub fn resolve_tap_at_column(&self, column: usize) -> Option<&Action> {
        self.char_offset_at_column(column)
            .and_then(|offset| self.resolve_tap(offset))
    }
}

/// Per-character map of link ids.
#[derive(Clone, Debug, Default)]
pub struct TapMap {
    cells: Vec<Option<u32>>,
}

impl TapMap {
    /// Create an empty map covering `len` characters.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            cells: vec![None; len],
        }
    }

    /// Build a map for rendered text, registering every actionable segment
    /// that has an action.
    #[must_use]
    pub fn from_rendered(rendered: &RenderedText, pool: &mut LinkPool) -> Self {
        let mut map = Self::new(rendered.len_chars());
        for segment in &rendered.segments {
            if let (true, Some(action)) = (segment.actionable, segment.action.as_ref()) {
                let id = pool.alloc(action);
                map.register(segment.char_range.start, segment.len_chars(), id);
            }
        }
        map
    }

    /// Clear all ranges.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Register a range. Later registrations win where ranges overlap; the
    /// part past the end of the map is ignored.
    pub fn register(&mut self, start: usize, len: usize, id: u32) {
        let end = start.saturating_add(len).min(self.cells.len());
        if start < end {
            self.cells[start..end].fill(Some(id));
        }
    }

    /// Link id at a character offset.
    #[must_use]
    pub fn test(&self, char_offset: usize) -> Option<u32> {
        self.cells.get(char_offset).copied().flatten()
    }

    /// Resize the map, clearing all ranges.
    pub fn resize(&mut self, len: usize) {
        self.cells = vec![None; len];
    }

    /// Number of characters covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the map covers no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
