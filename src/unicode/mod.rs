//! Grapheme and display-column helpers used to map taps onto text.

mod grapheme;
mod width;

pub use grapheme::{GraphemeInfo, char_offset_at_column, grapheme_info};
pub use width::{WidthMethod, display_width, display_width_with_method};
