//! Turning labels and modifiers into styled segments.
//!
//! Key pieces:
//!
//! - [`is_template`]: plain-versus-template classification
//! - [`substitute`]: placeholder substitution and splitting for templates
//! - [`resolve_style`]: modifier list to effective [`Style`](crate::Style)
//! - [`Segment`] / [`RenderedText`]: the ordered output handed to a surface
//!
//! # Examples
//!
//! ```
//! use richlabel::text::{is_template, substitute};
//! use richlabel::ContentModifier;
//!
//! let label = "This medicine is not $VAR$. For full details on our returns policies";
//! assert!(is_template(label));
//!
//! let modifiers = [
//!     ContentModifier::bold("$VAR$", "$VAR$"),
//!     ContentModifier::underline("$VAR$", "returnable"),
//! ];
//! let segments = substitute(label, &modifiers).unwrap();
//! assert_eq!(segments.len(), 3);
//! assert_eq!(segments[1].text, "returnable");
//! assert!(segments[1].actionable);
//! ```

mod resolve;
mod segment;
mod template;

pub use resolve::resolve_style;
pub use segment::{RenderPath, RenderedText, Segment, SegmentBuilder};
pub use template::{DEFAULT_SENTINEL, is_template, is_template_with, substitute};

pub(crate) use template::substitute_with;
