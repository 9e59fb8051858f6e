//! Content model: items, modifiers, interactions and actions.
//!
//! Everything here is an immutable value built once by a content source
//! (hardcoded data, JSON, a test) and then handed to the renderer. The serde
//! field names follow the JSON the content is authored in (`type`,
//! `displayText`, `onPressEvent`, `pelEvent`, ...).
//!
//! Kind tags are closed enums with a passthrough variant, so a tag this crate
//! does not know survives a decode/encode cycle unchanged.
//!
//! # Examples
//!
//! ```
//! use richlabel::{Action, ContentItem, ContentModifier};
//!
//! let item = ContentItem::text("$CTA$").with_modifiers([
//!     ContentModifier::bold("$CTA$", "$CTA$"),
//!     ContentModifier::link("$CTA$", "$CTA$", Action::show_toast("Action Performed")),
//!     ContentModifier::underline("$CTA$", "Read More"),
//! ]);
//! assert_eq!(item.modifiers.len(), 3);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Opaque telemetry and extra payloads: ordered keys, loosely-typed values.
///
/// The renderer never reads these; it only carries them to the dispatch
/// boundary.
pub type Telemetry = BTreeMap<String, Value>;

macro_rules! string_tag {
    (
        $(#[$meta:meta])*
        $name:ident, $other:ident { $($variant:ident => $tag:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $(
                #[doc = concat!("`", $tag, "`")]
                $variant,
            )+
            /// Any tag not listed above, kept verbatim.
            $other(String),
        }

        impl $name {
            /// The wire tag.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $tag,)+
                    Self::$other(tag) => tag,
                }
            }
        }

        impl From<&str> for $name {
            fn from(tag: &str) -> Self {
                match tag {
                    $($tag => Self::$variant,)+
                    other => Self::$other(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(tag: String) -> Self {
                match tag.as_str() {
                    $($tag => Self::$variant,)+
                    _ => Self::$other(tag),
                }
            }
        }

        impl From<$name> for String {
            fn from(kind: $name) -> Self {
                match kind {
                    $name::$other(tag) => tag,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_tag! {
    /// What a [`ContentItem`] displays.
    ItemKind, Unknown {
        Text => "text",
        Image => "image",
        Button => "button",
        ViewWithText => "view_with_text",
        CardBanner => "card_banner",
        FullBanner => "full_banner",
    }
}

impl ItemKind {
    /// Whether items of this kind carry a label the text renderer handles.
    #[must_use]
    pub const fn is_text_bearing(&self) -> bool {
        matches!(self, Self::Text | Self::Button | Self::ViewWithText)
    }

    /// Whether items of this kind are rendered as an image.
    #[must_use]
    pub const fn is_image(&self) -> bool {
        matches!(self, Self::Image | Self::CardBanner | Self::FullBanner)
    }
}

string_tag! {
    /// Style or behavior a [`ContentModifier`] applies.
    ModifierKind, Unknown {
        Bold => "bold",
        Size => "size",
        Color => "color",
        Underline => "underline",
        Strikethrough => "strikethrough",
        Link => "link",
    }
}

string_tag! {
    /// Tag of an [`Action`]. The dispatcher owns the meaning of each tag.
    ActionKind, Other {
        ShowToast => "show_toast",
        ShareCta => "share_cta",
        OnCartClicked => "on_cart_clicked",
    }
}

/// Payload carried by an [`Action`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: Telemetry,
}

/// A dispatcher-interpreted command triggered by user interaction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type", alias = "kind")]
    pub kind: ActionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ActionData>,
}

impl Action {
    /// Create an action without payload.
    #[must_use]
    pub fn new(kind: impl Into<ActionKind>) -> Self {
        Self {
            kind: kind.into(),
            data: None,
        }
    }

    /// `show_toast` action carrying `message`.
    #[must_use]
    pub fn show_toast(message: impl Into<String>) -> Self {
        Self::new(ActionKind::ShowToast).with_extra("message", Value::String(message.into()))
    }

    /// Return the action with an extra payload entry added.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data
            .get_or_insert_with(ActionData::default)
            .extra
            .insert(key.into(), value.into());
        self
    }

    /// Return the action with a url set.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.data.get_or_insert_with(ActionData::default).url = Some(url.into());
        self
    }

    /// Look up an extra payload value.
    #[must_use]
    pub fn extra(&self, key: &str) -> Option<&Value> {
        self.data.as_ref().and_then(|data| data.extra.get(key))
    }

    /// The `message` extra, if it is a string.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.extra("message").and_then(Value::as_str)
    }

    /// The url, if any.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.data.as_ref().and_then(|data| data.url.as_deref())
    }
}

/// Fired when content becomes visible.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewEvent {
    #[serde(rename = "pelEvent", default)]
    pub pel_event: Telemetry,
}

/// Fired when content is pressed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PressEvent {
    pub action: Action,
    #[serde(rename = "pelEvent", default)]
    pub pel_event: Telemetry,
}

/// View and press behavior.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Interaction {
    #[serde(
        rename = "onViewEvent",
        alias = "onView",
        skip_serializing_if = "Option::is_none"
    )]
    pub on_view: Option<ViewEvent>,
    #[serde(
        rename = "onPressEvent",
        alias = "onPress",
        skip_serializing_if = "Option::is_none"
    )]
    pub on_press: Option<PressEvent>,
}

impl Interaction {
    /// Interaction that fires `action` on press, with empty telemetry.
    #[must_use]
    pub fn on_press(action: Action) -> Self {
        Self {
            on_view: None,
            on_press: Some(PressEvent {
                action,
                pel_event: Telemetry::new(),
            }),
        }
    }

    /// The press action, if any.
    #[must_use]
    pub fn press_action(&self) -> Option<&Action> {
        self.on_press.as_ref().map(|press| &press.action)
    }
}

/// One style or behavior directive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentModifier {
    #[serde(rename = "type", alias = "kind")]
    pub kind: ModifierKind,
    #[serde(default)]
    pub identifier: String,
    #[serde(default, alias = "display_text")]
    pub display_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interaction: Option<Interaction>,
}

impl ContentModifier {
    /// Modifier of `kind` targeting `identifier`.
    #[must_use]
    pub fn new(
        kind: impl Into<ModifierKind>,
        identifier: impl Into<String>,
        display_text: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            identifier: identifier.into(),
            display_text: display_text.into(),
            size: None,
            color: None,
            interaction: None,
        }
    }

    #[must_use]
    pub fn bold(identifier: impl Into<String>, display_text: impl Into<String>) -> Self {
        Self::new(ModifierKind::Bold, identifier, display_text)
    }

    #[must_use]
    pub fn underline(identifier: impl Into<String>, display_text: impl Into<String>) -> Self {
        Self::new(ModifierKind::Underline, identifier, display_text)
    }

    #[must_use]
    pub fn strikethrough(identifier: impl Into<String>, display_text: impl Into<String>) -> Self {
        Self::new(ModifierKind::Strikethrough, identifier, display_text)
    }

    #[must_use]
    pub fn size(
        identifier: impl Into<String>,
        display_text: impl Into<String>,
        size: f32,
    ) -> Self {
        Self {
            size: Some(size),
            ..Self::new(ModifierKind::Size, identifier, display_text)
        }
    }

    #[must_use]
    pub fn color(
        identifier: impl Into<String>,
        display_text: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            color: Some(color.into()),
            ..Self::new(ModifierKind::Color, identifier, display_text)
        }
    }

    /// Link modifier that fires `action` when its text is tapped.
    #[must_use]
    pub fn link(
        identifier: impl Into<String>,
        display_text: impl Into<String>,
        action: Action,
    ) -> Self {
        Self {
            interaction: Some(Interaction::on_press(action)),
            ..Self::new(ModifierKind::Link, identifier, display_text)
        }
    }

    /// The press action of this modifier's interaction.
    #[must_use]
    pub fn press_action(&self) -> Option<&Action> {
        self.interaction.as_ref().and_then(Interaction::press_action)
    }
}

/// First modifier of `kind`, in list order.
#[must_use]
pub fn find_by_kind<'a>(
    modifiers: &'a [ContentModifier],
    kind: &ModifierKind,
) -> Option<&'a ContentModifier> {
    modifiers.iter().find(|modifier| &modifier.kind == kind)
}

/// A unit of displayable text or media.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    #[serde(rename = "type", alias = "kind")]
    pub kind: ItemKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_icon: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<ContentModifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interaction: Option<Interaction>,
}

impl ContentItem {
    /// Empty item of `kind`.
    #[must_use]
    pub fn new(kind: impl Into<ItemKind>) -> Self {
        Self {
            kind: kind.into(),
            sub_type: None,
            url: None,
            label: None,
            image_width: None,
            image_height: None,
            left_icon: None,
            modifiers: Vec::new(),
            interaction: None,
        }
    }

    /// Text item with `label`.
    #[must_use]
    pub fn text(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::new(ItemKind::Text)
        }
    }

    /// Image item pointing at `url`.
    #[must_use]
    pub fn image(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::new(ItemKind::Image)
        }
    }

    /// Decode an item from JSON.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_modifier(mut self, modifier: ContentModifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: impl IntoIterator<Item = ContentModifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    #[must_use]
    pub fn with_interaction(mut self, interaction: Interaction) -> Self {
        self.interaction = Some(interaction);
        self
    }

    #[must_use]
    pub fn with_image_size(mut self, width: Option<f64>, height: Option<f64>) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// First modifier of `kind`.
    #[must_use]
    pub fn modifier(&self, kind: &ModifierKind) -> Option<&ContentModifier> {
        find_by_kind(&self.modifiers, kind)
    }

    /// Whole-item press action.
    #[must_use]
    pub fn press_action(&self) -> Option<&Action> {
        self.interaction.as_ref().and_then(Interaction::press_action)
    }
}
