//! `richlabel` - server-driven rich text labels
//!
//! Renders content items (a label plus a list of style and link modifiers)
//! into ordered, styled segments, and resolves taps on those segments back
//! to the actions the content bound to them.

// Crate-level lint configuration
#![allow(clippy::cast_possible_truncation)] // Link ids are bounded by pool size
#![allow(clippy::module_name_repetitions)] // Allow text::TextDecoration etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::format_push_string)] // format! with push_str is fine
#![allow(clippy::needless_pass_by_value)] // Allow pass by value for small Copy types
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine
#![allow(clippy::float_cmp)] // Sizes compared exactly in tests

pub mod color;
pub mod content;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod image;
pub mod link;
pub mod render;
pub mod section;
pub mod style;
pub mod tap;
pub mod text;
pub mod unicode;

// Re-export core types at crate root
pub use color::Rgba;
pub use content::{
    Action, ActionData, ActionKind, ContentItem, ContentModifier, Interaction, ItemKind,
    ModifierKind, PressEvent, Telemetry, ViewEvent,
};
pub use error::{Error, Result};
pub use event::{
    EVENT_ACTION_RESOLVED, LogLevel, clear_event_callback, clear_log_callback, emit_event,
    emit_log, set_event_callback, set_log_callback,
};
pub use link::LinkPool;
pub use style::{FontWeight, Style, StyleBuilder, TextDecoration};

// Re-export rendering types
pub use render::{RenderOptions, Renderer, render};
pub use text::{RenderPath, RenderedText, Segment, is_template, resolve_style, substitute};

// Re-export interaction types
pub use dispatch::{ActionHandler, Command, Notifier, ToastDispatcher};
pub use image::{Extent, ImageFetcher, ImageRequest, ImageResource};
pub use section::{Component, Section, Selection};
pub use tap::{TapMap, resolve_tap};
pub use unicode::WidthMethod;
