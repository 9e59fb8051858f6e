//! Rendering content items into styled, tappable text.
//!
//! [`Renderer`] classifies each item's label and takes one of two paths:
//!
//! - **plain**: a single run. With modifiers, the run's text is the *last*
//!   modifier's display text and the label is not shown; without modifiers it
//!   is the raw label.
//! - **rich**: the placeholder is substituted and the label is split around
//!   the styled fragment (see [`substitute`](crate::text::substitute)).
//!
//! # Examples
//!
//! ```
//! use richlabel::{Action, ContentItem, ContentModifier, Renderer};
//!
//! let item = ContentItem::text("$CTA$").with_modifiers([
//!     ContentModifier::bold("$CTA$", "$CTA$"),
//!     ContentModifier::link("$CTA$", "$CTA$", Action::show_toast("Action Performed")),
//!     ContentModifier::underline("$CTA$", "Read More"),
//! ]);
//!
//! let rendered = Renderer::default().render(&item).unwrap();
//! assert_eq!(rendered.text(), "Read More");
//! assert_eq!(rendered.resolve_tap(2).unwrap().message(), Some("Action Performed"));
//! ```

use crate::content::{Action, ContentItem, ModifierKind};
use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_log};
use crate::style::Style;
use crate::text::{
    DEFAULT_SENTINEL, RenderPath, RenderedText, SegmentBuilder, is_template_with, resolve_style,
    substitute_with,
};
use serde::{Deserialize, Serialize};

/// Renderer configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
    /// Placeholder delimiter.
    pub sentinel: char,
    /// Base text style supplied by the surface; modifiers override it.
    pub base_style: Option<Style>,
    /// Emit empty before/after fragments on the rich path.
    pub keep_empty_fragments: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            sentinel: DEFAULT_SENTINEL,
            base_style: None,
            keep_empty_fragments: false,
        }
    }
}

impl RenderOptions {
    /// Set the placeholder delimiter.
    #[must_use]
    pub const fn sentinel(mut self, sentinel: char) -> Self {
        self.sentinel = sentinel;
        self
    }

    /// Set the base style.
    #[must_use]
    pub const fn base_style(mut self, style: Style) -> Self {
        self.base_style = Some(style);
        self
    }

    /// Keep empty before/after fragments.
    #[must_use]
    pub const fn keep_empty_fragments(mut self, keep: bool) -> Self {
        self.keep_empty_fragments = keep;
        self
    }
}

/// Renders content items. Rendering is pure: the same item always yields the
/// same output.
#[derive(Clone, Debug, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    /// Create a renderer with the given options.
    #[must_use]
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Whether `label` takes the rich path under this renderer's sentinel.
    #[must_use]
    pub fn is_template(&self, label: &str) -> bool {
        is_template_with(label, self.options.sentinel)
    }

    /// Render one item.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidContent`] when the item has nothing to render as text:
    /// an image item, modifiers without a label, or neither label nor
    /// modifiers.
    pub fn render(&self, item: &ContentItem) -> Result<RenderedText> {
        if item.kind.is_image() {
            return Err(Error::invalid_content(format!(
                "{} items carry no text",
                item.kind
            )));
        }

        let label = item.label.as_deref();
        if !item.modifiers.is_empty() && label.is_none_or(str::is_empty) {
            return Err(Error::invalid_content(
                "modifiers are present but the label is missing",
            ));
        }
        let rich = label.is_some_and(|label| self.is_template(label));
        emit_log(
            LogLevel::Debug,
            &format!(
                "label {:?} takes the {} path",
                label.unwrap_or_default(),
                if rich { "rich" } else { "plain" }
            ),
        );

        if rich {
            self.render_rich(item, label.unwrap_or_default())
        } else {
            self.render_plain(item, label)
        }
    }

    /// Render one item, turning content errors into an empty placeholder.
    #[must_use]
    pub fn render_or_placeholder(&self, item: &ContentItem) -> RenderedText {
        self.render(item).unwrap_or_else(|err| {
            emit_log(LogLevel::Error, &format!("rendering placeholder: {err}"));
            RenderedText::placeholder()
        })
    }

    /// Render a batch; an invalid item becomes a placeholder, the rest render.
    #[must_use]
    pub fn render_all<'a, I>(&self, items: I) -> Vec<RenderedText>
    where
        I: IntoIterator<Item = &'a ContentItem>,
    {
        items
            .into_iter()
            .map(|item| self.render_or_placeholder(item))
            .collect()
    }

    fn render_rich(&self, item: &ContentItem, label: &str) -> Result<RenderedText> {
        let segments = substitute_with(label, &item.modifiers, self.options.keep_empty_fragments)?;
        Ok(RenderedText {
            path: RenderPath::Rich,
            segments,
            base_style: self.options.base_style,
            item_action: whole_item_action(item),
        })
    }

    fn render_plain(&self, item: &ContentItem, label: Option<&str>) -> Result<RenderedText> {
        let mut builder = SegmentBuilder::new();

        if let Some(last) = item.modifiers.last() {
            let style = resolve_style(&item.modifiers, self.options.base_style);
            let action = match item.modifier(&ModifierKind::Link) {
                Some(link) => link.press_action().cloned(),
                None => item.press_action().cloned(),
            };
            let actionable = item.modifier(&ModifierKind::Link).is_some() || action.is_some();
            builder.push(&last.display_text, Some(style), actionable, action);
        } else {
            let label = label.ok_or_else(|| {
                Error::invalid_content("item has neither a label nor modifiers")
            })?;
            let action = item.press_action().cloned();
            builder.push(label, self.options.base_style, action.is_some(), action);
        }

        Ok(RenderedText {
            path: RenderPath::Plain,
            segments: builder.finish(),
            base_style: self.options.base_style,
            item_action: whole_item_action(item),
        })
    }
}

/// The item's own press action, unless a link modifier takes over tapping.
fn whole_item_action(item: &ContentItem) -> Option<Action> {
    if item.modifier(&ModifierKind::Link).is_some() {
        None
    } else {
        item.press_action().cloned()
    }
}

/// Render with default options.
///
/// # Errors
///
/// See [`Renderer::render`].
pub fn render(item: &ContentItem) -> Result<RenderedText> {
    Renderer::default().render(item)
}

impl ContentItem {
    /// Check the item against the invariants rendering relies on.
    ///
    /// Stricter than rendering, which degrades instead of failing on most of
    /// these. Content sources that want to reject bad items call this first.
    ///
    /// # Errors
    ///
    /// The first problem found:
    /// - [`Error::InvalidContent`]: modifiers without a label, or nothing to render
    /// - [`Error::UnresolvedPlaceholder`]: the first modifier's token is not in
    ///   the template label
    /// - [`Error::InvalidColor`]: a color modifier's color does not parse
    /// - [`Error::MissingAction`]: a link modifier without a press action
    pub fn validate(&self, options: &RenderOptions) -> Result<()> {
        if self.kind.is_image() {
            return Ok(());
        }

        let label = self.label.as_deref();
        if label.is_none() && self.modifiers.is_empty() {
            return Err(Error::invalid_content(
                "item has neither a label nor modifiers",
            ));
        }
        if !self.modifiers.is_empty() && label.is_none_or(str::is_empty) {
            return Err(Error::invalid_content(
                "modifiers are present but the label is missing",
            ));
        }

        if let (Some(label), Some(first)) = (label, self.modifiers.first()) {
            if is_template_with(label, options.sentinel) {
                if first.identifier.is_empty() || !label.contains(&first.identifier) {
                    return Err(Error::UnresolvedPlaceholder {
                        token: first.identifier.clone(),
                        label: label.to_string(),
                    });
                }
            }
        }

        for modifier in &self.modifiers {
            if let (ModifierKind::Color, Some(color)) = (&modifier.kind, &modifier.color) {
                color.parse::<crate::color::Rgba>()?;
            }
        }

        if let Some(link) = self.modifier(&ModifierKind::Link) {
            if link.press_action().is_none() {
                let text = self
                    .modifiers
                    .last()
                    .map(|last| last.display_text.clone())
                    .unwrap_or_default();
                return Err(Error::MissingAction { text });
            }
        }

        Ok(())
    }
}
