//! Colors carried by `color` modifiers.
//!
//! Modifier colors arrive as text. This module parses them into [`Rgba`]:
//!
//! - `#RGB` shorthand (each digit doubled),
//! - `#RRGGBB` opaque colors,
//! - `#AARRGGBB` with the alpha channel first, as content authored for
//!   Android expects,
//! - a small table of color names (`black`, `white`, `red`, ...).
//!
//! # Examples
//!
//! ```
//! use richlabel::Rgba;
//!
//! let link_blue = Rgba::from_hex("#346ab2").unwrap();
//! assert_eq!(link_blue, Rgba::rgb(0x34, 0x6a, 0xb2));
//!
//! let black: Rgba = "#000".parse().unwrap();
//! assert_eq!(black, Rgba::BLACK);
//!
//! assert_eq!(Rgba::from_hex("#80FF0000").unwrap().a, 0x80);
//! ```

use crate::error::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);
    /// Opaque red.
    pub const RED: Self = Self::rgb(0xFF, 0, 0);
    /// Opaque green.
    pub const GREEN: Self = Self::rgb(0, 0xFF, 0);
    /// Opaque blue.
    pub const BLUE: Self = Self::rgb(0, 0, 0xFF);

    /// Create a color from all four channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// Parse a hex color string (`#RGB`, `#RRGGBB` or `#AARRGGBB`, `#` optional)
    /// or one of the named colors.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let trimmed = hex.trim();
        if let Some(named) = Self::from_name(trimmed) {
            return Some(named);
        }
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();

        match digits.len() {
            3 => {
                let r = channel(0..1)?;
                let g = channel(1..2)?;
                let b = channel(2..3)?;
                Some(Self::rgb(r * 17, g * 17, b * 17))
            }
            6 => Some(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Some(Self::new(
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
                channel(0..2)?,
            )),
            _ => None,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        let color = match name.to_ascii_lowercase().as_str() {
            "black" => Self::BLACK,
            "white" => Self::WHITE,
            "red" => Self::RED,
            "green" | "lime" => Self::GREEN,
            "blue" => Self::BLUE,
            "yellow" => Self::rgb(0xFF, 0xFF, 0),
            "cyan" | "aqua" => Self::rgb(0, 0xFF, 0xFF),
            "magenta" | "fuchsia" => Self::rgb(0xFF, 0, 0xFF),
            "gray" | "grey" => Self::rgb(0x88, 0x88, 0x88),
            "lightgray" | "lightgrey" => Self::rgb(0xCC, 0xCC, 0xCC),
            "darkgray" | "darkgrey" => Self::rgb(0x44, 0x44, 0x44),
            "transparent" => Self::TRANSPARENT,
            _ => return None,
        };
        Some(color)
    }

    /// Whether the alpha channel is fully opaque.
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.a == 0xFF
    }

    /// Format as `#RRGGBB`, or `#AARRGGBB` when not opaque.
    #[must_use]
    pub fn to_hex(self) -> String {
        if self.is_opaque() {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s).ok_or_else(|| Error::InvalidColor(s.to_string()))
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_rrggbb() {
        assert_eq!(Rgba::from_hex("#346ab2"), Some(Rgba::rgb(0x34, 0x6A, 0xB2)));
        assert_eq!(Rgba::from_hex("346AB2"), Some(Rgba::rgb(0x34, 0x6A, 0xB2)));
    }

    #[test]
    fn test_from_hex_shorthand() {
        assert_eq!(Rgba::from_hex("#000"), Some(Rgba::BLACK));
        assert_eq!(Rgba::from_hex("#fff"), Some(Rgba::WHITE));
        assert_eq!(Rgba::from_hex("#f80"), Some(Rgba::rgb(0xFF, 0x88, 0x00)));
    }

    #[test]
    fn test_from_hex_alpha_first() {
        let c = Rgba::from_hex("#80112233").unwrap();
        assert_eq!(c, Rgba::new(0x11, 0x22, 0x33, 0x80));
        assert!(!c.is_opaque());
    }

    #[test]
    fn test_from_hex_named() {
        assert_eq!(Rgba::from_hex("black"), Some(Rgba::BLACK));
        assert_eq!(Rgba::from_hex("Red"), Some(Rgba::RED));
        assert_eq!(Rgba::from_hex("grey"), Rgba::from_hex("gray"));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert_eq!(Rgba::from_hex(""), None);
        assert_eq!(Rgba::from_hex("#"), None);
        assert_eq!(Rgba::from_hex("#12"), None);
        assert_eq!(Rgba::from_hex("#gggggg"), None);
        assert_eq!(Rgba::from_hex("#12345"), None);
        assert_eq!(Rgba::from_hex("#+1+2+3"), None);
        assert_eq!(Rgba::from_hex("#ééé"), None);
        assert_eq!(Rgba::from_hex("chartreuse-ish"), None);
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Rgba::rgb(0x34, 0x6A, 0xB2).to_hex(), "#346AB2");
        assert_eq!(Rgba::new(1, 2, 3, 4).to_hex(), "#04010203");
        assert_eq!(Rgba::from_hex(&Rgba::new(1, 2, 3, 4).to_hex()), Some(Rgba::new(1, 2, 3, 4)));
    }

    #[test]
    fn test_from_str_error() {
        let err = "nope".parse::<Rgba>().unwrap_err();
        assert!(matches!(err, Error::InvalidColor(s) if s == "nope"));
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&Rgba::RED).unwrap();
        assert_eq!(json, "\"#FF0000\"");
        let back: Rgba = serde_json::from_str("\"#ff0000\"").unwrap();
        assert_eq!(back, Rgba::RED);
        assert!(serde_json::from_str::<Rgba>("\"#zz\"").is_err());
    }
}
