//! Text style produced by resolving modifiers.
//!
//! This module provides the style vocabulary shared by the resolver and the
//! rendered output:
//!
//! - [`TextDecoration`]: Bitflags for underline and line-through
//! - [`FontWeight`]: Numeric font weight (400 normal, 700 bold)
//! - [`Style`]: Effective style of a rendered segment; every attribute is
//!   optional, `None` meaning "unspecified, inherit from the surface"
//! - [`StyleBuilder`]: Fluent builder for base styles
//!
//! # Examples
//!
//! ```
//! use richlabel::{FontWeight, Rgba, Style, TextDecoration};
//!
//! let base = Style::builder().font_size(14.0).color(Rgba::BLACK).build();
//! let overlay = Style::bold().with_decoration(TextDecoration::UNDERLINE);
//!
//! let merged = base.merge(overlay);
//! assert_eq!(merged.font_size, Some(14.0));
//! assert_eq!(merged.font_weight, Some(FontWeight::BOLD));
//! assert_eq!(merged.decoration, Some(TextDecoration::UNDERLINE));
//! ```

use crate::color::Rgba;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Lines drawn across text.
    ///
    /// Flags combine the way a base style may combine them; the resolver
    /// itself only ever picks one.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
    pub struct TextDecoration: u8 {
        /// Line below the text.
        const UNDERLINE    = 0x01;
        /// Line through the middle of the text.
        const LINE_THROUGH = 0x02;
    }
}

impl TextDecoration {
    /// No decoration.
    pub const NONE: Self = Self::empty();
}

/// Numeric font weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Regular weight.
    pub const NORMAL: Self = Self(400);
    /// Bold weight.
    pub const BOLD: Self = Self(700);

    /// Whether this weight renders as bold.
    #[must_use]
    pub const fn is_bold(self) -> bool {
        self.0 >= Self::BOLD.0
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Effective style of a piece of text.
///
/// `None` attributes are unspecified: the render surface keeps whatever it
/// would use anyway. Styles are cheap to copy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Style {
    /// Font size in scale-independent units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    /// Font weight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    /// Text color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgba>,
    /// Decoration lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decoration: Option<TextDecoration>,
}

impl Style {
    /// Style with every attribute unspecified.
    pub const NONE: Self = Self {
        font_size: None,
        font_weight: None,
        color: None,
        decoration: None,
    };

    /// Create a new style builder.
    #[must_use]
    pub fn builder() -> StyleBuilder {
        StyleBuilder::default()
    }

    /// Create a bold style.
    #[must_use]
    pub const fn bold() -> Self {
        Self {
            font_weight: Some(FontWeight::BOLD),
            ..Self::NONE
        }
    }

    /// Create a style with only a color.
    #[must_use]
    pub const fn color(color: Rgba) -> Self {
        Self {
            color: Some(color),
            ..Self::NONE
        }
    }

    /// Create a style with only a font size.
    #[must_use]
    pub const fn size(font_size: f32) -> Self {
        Self {
            font_size: Some(font_size),
            ..Self::NONE
        }
    }

    /// Return a new style with the given color.
    #[must_use]
    pub const fn with_color(self, color: Rgba) -> Self {
        Self {
            color: Some(color),
            ..self
        }
    }

    /// Return a new style with the given font size.
    #[must_use]
    pub const fn with_font_size(self, font_size: f32) -> Self {
        Self {
            font_size: Some(font_size),
            ..self
        }
    }

    /// Return a new style with the given weight.
    #[must_use]
    pub const fn with_weight(self, weight: FontWeight) -> Self {
        Self {
            font_weight: Some(weight),
            ..self
        }
    }

    /// Return a new style with the given decoration.
    #[must_use]
    pub const fn with_decoration(self, decoration: TextDecoration) -> Self {
        Self {
            decoration: Some(decoration),
            ..self
        }
    }

    /// Whether the style renders bold.
    #[must_use]
    pub fn is_bold(&self) -> bool {
        self.font_weight.is_some_and(FontWeight::is_bold)
    }

    /// Check if every attribute is unspecified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.font_size.is_none()
            && self.font_weight.is_none()
            && self.color.is_none()
            && self.decoration.is_none()
    }

    /// Merge two styles, with `other` taking precedence for set values.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            font_size: other.font_size.or(self.font_size),
            font_weight: other.font_weight.or(self.font_weight),
            color: other.color.or(self.color),
            decoration: other.decoration.or(self.decoration),
        }
    }
}

/// Builder for creating styles fluently.
#[derive(Clone, Debug, Default)]
pub struct StyleBuilder {
    style: Style,
}

impl StyleBuilder {
    /// Set font size.
    #[must_use]
    pub fn font_size(mut self, size: f32) -> Self {
        self.style.font_size = Some(size);
        self
    }

    /// Set font weight.
    #[must_use]
    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.style.font_weight = Some(weight);
        self
    }

    /// Set bold weight.
    #[must_use]
    pub fn bold(self) -> Self {
        self.weight(FontWeight::BOLD)
    }

    /// Set color.
    #[must_use]
    pub fn color(mut self, color: Rgba) -> Self {
        self.style.color = Some(color);
        self
    }

    /// Add underline.
    #[must_use]
    pub fn underline(mut self) -> Self {
        let current = self.style.decoration.unwrap_or_default();
        self.style.decoration = Some(current | TextDecoration::UNDERLINE);
        self
    }

    /// Add line-through.
    #[must_use]
    pub fn strikethrough(mut self) -> Self {
        let current = self.style.decoration.unwrap_or_default();
        self.style.decoration = Some(current | TextDecoration::LINE_THROUGH);
        self
    }

    /// Build the final style.
    #[must_use]
    pub fn build(self) -> Style {
        self.style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_builder() {
        let style = Style::builder()
            .font_size(18.0)
            .bold()
            .color(Rgba::RED)
            .underline()
            .strikethrough()
            .build();

        assert_eq!(style.font_size, Some(18.0));
        assert!(style.is_bold());
        assert_eq!(style.color, Some(Rgba::RED));
        let decoration = style.decoration.unwrap();
        assert!(decoration.contains(TextDecoration::UNDERLINE));
        assert!(decoration.contains(TextDecoration::LINE_THROUGH));
    }

    #[test]
    fn test_style_merge_overlay_wins() {
        let base = Style::color(Rgba::RED).with_font_size(12.0);
        let overlay = Style::color(Rgba::BLUE).with_weight(FontWeight::BOLD);

        let merged = base.merge(overlay);

        assert_eq!(merged.color, Some(Rgba::BLUE));
        assert_eq!(merged.font_size, Some(12.0));
        assert_eq!(merged.font_weight, Some(FontWeight::BOLD));
        assert_eq!(merged.decoration, None);
    }

    #[test]
    fn test_style_empty() {
        assert!(Style::NONE.is_empty());
        assert!(Style::default().is_empty());
        assert!(!Style::bold().is_empty());
        assert!(!Style::NONE.is_bold());
    }

    #[test]
    fn test_font_weight() {
        assert!(FontWeight::BOLD.is_bold());
        assert!(FontWeight(900).is_bold());
        assert!(!FontWeight::NORMAL.is_bold());
        assert_eq!(FontWeight::default(), FontWeight::NORMAL);
    }

    #[test]
    fn test_style_serde_skips_unspecified() {
        let json = serde_json::to_value(Style::bold().with_color(Rgba::BLACK)).unwrap();
        assert_eq!(json, serde_json::json!({"fontWeight": 700, "color": "#000000"}));

        let back: Style = serde_json::from_value(json).unwrap();
        assert_eq!(back, Style::bold().with_color(Rgba::BLACK));
    }
}
