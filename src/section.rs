//! Containers a content source hands over: components, sections and the
//! selection state of an indicator strip.

use crate::content::Interaction;
use serde::{Deserialize, Serialize};

/// Versioned content with an optional section-wide interaction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Section<T> {
    pub version: u32,
    pub content: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interaction: Option<Interaction>,
}

impl<T> Section<T> {
    /// Section at version 1 without interaction.
    pub const fn new(content: T) -> Self {
        Self {
            version: 1,
            content,
            interaction: None,
        }
    }
}

impl<T: for<'de> Deserialize<'de>> Section<T> {
    /// Decode a section from JSON.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A screen component wrapping a section, possibly loaded later.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component<T> {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub is_lazy_loaded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lazy_load_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<Section<T>>,
}

impl<T> Component<T> {
    /// Whether the section still has to be fetched.
    pub const fn is_pending(&self) -> bool {
        self.is_lazy_loaded && self.section.is_none()
    }
}

/// Items with at most one selected index.
///
/// [`select`](Self::select) reports which indices changed so the caller can
/// redraw exactly those; nothing is redrawn implicitly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection<T> {
    items: Vec<T>,
    selected: Option<usize>,
}

impl<T> Selection<T> {
    /// Selection over `items` with the first item selected.
    pub fn new(items: Vec<T>) -> Self {
        let selected = if items.is_empty() { None } else { Some(0) };
        Self { items, selected }
    }

    /// Items in order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Selected index.
    pub const fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Selected item.
    pub fn selected_item(&self) -> Option<&T> {
        self.selected.and_then(|idx| self.items.get(idx))
    }

    /// Whether `index` is the selected one.
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Select `index`. Returns the indices to redraw, or an empty list when
    /// the index is out of range or already selected.
    pub fn select(&mut self, index: usize) -> Vec<usize> {
        if index >= self.items.len() || self.selected == Some(index) {
            return Vec::new();
        }
        let previous = self.selected.replace(index);
        previous.into_iter().chain(std::iter::once(index)).collect()
    }

    /// Replace the items; selection resets to the first item. Every index
    /// needs redrawing.
    pub fn replace(&mut self, items: Vec<T>) -> std::ops::Range<usize> {
        *self = Self::new(items);
        0..self.items.len()
    }
}
