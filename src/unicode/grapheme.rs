//! Grapheme cluster layout in character offsets and display columns.

use crate::unicode::width::{WidthMethod, display_width_with_method};
use unicode_segmentation::UnicodeSegmentation;

/// Where one grapheme cluster sits in a string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphemeInfo {
    pub byte_offset: usize,
    pub char_offset: usize,
    pub char_len: usize,
    pub col_offset: usize,
    pub width: usize,
}

/// Compute grapheme layout for a string.
#[must_use]
pub fn grapheme_info(s: &str, method: WidthMethod) -> Vec<GraphemeInfo> {
    let mut infos = Vec::new();
    let mut chars = 0;
    let mut col = 0;

    for (byte_offset, grapheme) in s.grapheme_indices(true) {
        let char_len = grapheme.chars().count();
        let width = display_width_with_method(grapheme, method);
        infos.push(GraphemeInfo {
            byte_offset,
            char_offset: chars,
            char_len,
            col_offset: col,
            width,
        });
        chars += char_len;
        col += width;
    }

    infos
}

/// Character offset of the grapheme covering display `column`.
///
/// Wide graphemes cover every column they span; zero-width graphemes are
/// never hit. Returns `None` past the last column.
#[must_use]
pub fn char_offset_at_column(s: &str, column: usize, method: WidthMethod) -> Option<usize> {
    grapheme_info(s, method)
        .into_iter()
        .find(|info| info.width > 0 && (info.col_offset..info.col_offset + info.width).contains(&column))
        .map(|info| info.char_offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_emoji_is_one_grapheme() {
        let infos = grapheme_info("👨‍👩‍👧!", WidthMethod::WcWidth);
        assert_eq!(infos.len(), 2);
        assert_eq!(infos[1].char_offset, 5);
    }

    #[test]
    fn test_grapheme_info_offsets() {
        let infos = grapheme_info("a漢e\u{0301}b", WidthMethod::WcWidth);
        assert_eq!(infos.len(), 4);
        assert_eq!(infos[1].byte_offset, 1);
        assert_eq!(infos[1].col_offset, 1);
        assert_eq!(infos[1].width, 2);
        assert_eq!(infos[2].char_offset, 2);
        assert_eq!(infos[2].char_len, 2);
        assert_eq!(infos[2].col_offset, 3);
        assert_eq!(infos[3].char_offset, 4);
        assert_eq!(infos[3].col_offset, 4);
    }

    #[test]
    fn test_char_offset_at_column() {
        let s = "a漢b";
        let at = |column| char_offset_at_column(s, column, WidthMethod::WcWidth);
        assert_eq!(at(0), Some(0));
        assert_eq!(at(1), Some(1));
        assert_eq!(at(2), Some(1));
        assert_eq!(at(3), Some(2));
        assert_eq!(at(4), None);
        assert_eq!(char_offset_at_column("", 0, WidthMethod::WcWidth), None);
    }

    #[test]
    fn test_char_offset_at_column_ambiguous() {
        let s = "①x";
        assert_eq!(char_offset_at_column(s, 1, WidthMethod::WcWidth), Some(1));
        assert_eq!(char_offset_at_column(s, 1, WidthMethod::Unicode), Some(0));
        assert_eq!(char_offset_at_column(s, 2, WidthMethod::Unicode), Some(1));
    }
}
