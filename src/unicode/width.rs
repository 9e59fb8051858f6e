//! Column widths for surfaces that report taps in display columns.

use unicode_width::UnicodeWidthStr;

/// How ambiguous-width characters (`①`, `±`, some Greek and Cyrillic) are
/// counted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidthMethod {
    /// One column, as in most Latin-script locales.
    #[default]
    WcWidth,
    /// Two columns, as in East Asian locales.
    Unicode,
}

/// Display width of `s` in columns, counting ambiguous characters as one.
#[must_use]
pub fn display_width(s: &str) -> usize {
    display_width_with_method(s, WidthMethod::WcWidth)
}

/// Display width of `s` in columns.
#[must_use]
pub fn display_width_with_method(s: &str, method: WidthMethod) -> usize {
    match method {
        WidthMethod::WcWidth => s.width(),
        WidthMethod::Unicode => s.width_cjk(),
    }
}
