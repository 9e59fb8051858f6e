//! Action dispatch boundary.
//!
//! The renderer only ever hands out [`Action`] values. Turning them into
//! effects is the job of an [`ActionHandler`] owned by the host. This module
//! provides the conventional reading of the known action kinds
//! ([`Command::from_action`]) and a handler that shows toasts through a
//! host-supplied [`Notifier`].
//!
//! # Examples
//!
//! ```
//! use richlabel::{Action, ActionHandler, ToastDispatcher};
//!
//! let mut shown = Vec::new();
//! let mut dispatcher = ToastDispatcher::new(|message: &str| shown.push(message.to_string()));
//! dispatcher.dispatch(&Action::show_toast("Word clicked").with_extra("drug_id", 42));
//! drop(dispatcher);
//!
//! assert_eq!(shown, ["Word clicked", "Drug ID 42"]);
//! ```

use crate::content::{Action, ActionKind, Telemetry};
use crate::event::{LogLevel, emit_log};
use serde::Serialize;
use serde_json::Value;

/// What an action asks the host to do.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Show each message as a transient notification.
    ShowToast { messages: Vec<String> },
    /// Open the share flow.
    Share {
        url: Option<String>,
        extra: Telemetry,
    },
    /// The cart button was pressed.
    CartClicked {
        drug_id: Option<i64>,
        extra: Telemetry,
    },
    /// A kind this crate does not interpret; forwarded as is.
    Passthrough(Action),
}

impl Command {
    /// Read an action by convention.
    ///
    /// `show_toast` yields the `message` extra verbatim and the `drug_id`
    /// extra as `"Drug ID {id}"`, in that order, skipping whichever is absent
    /// or of the wrong type.
    #[must_use]
    pub fn from_action(action: &Action) -> Self {
        let extra = action
            .data
            .as_ref()
            .map(|data| data.extra.clone())
            .unwrap_or_default();

        match &action.kind {
            ActionKind::ShowToast => {
                let mut messages = Vec::new();
                if let Some(message) = action.message() {
                    messages.push(message.to_string());
                }
                if let Some(id) = drug_id(action) {
                    messages.push(format!("Drug ID {id}"));
                }
                Self::ShowToast { messages }
            }
            ActionKind::ShareCta => Self::Share {
                url: action.url().map(str::to_string),
                extra,
            },
            ActionKind::OnCartClicked => Self::CartClicked {
                drug_id: drug_id(action),
                extra,
            },
            ActionKind::Other(_) => Self::Passthrough(action.clone()),
        }
    }
}

fn drug_id(action: &Action) -> Option<i64> {
    action.extra("drug_id").and_then(Value::as_i64)
}

/// Consumes resolved actions.
pub trait ActionHandler {
    /// Perform the effect for `action`. Never fails back into the renderer.
    fn dispatch(&mut self, action: &Action);
}

impl<F> ActionHandler for F
where
    F: FnMut(&Action),
{
    fn dispatch(&mut self, action: &Action) {
        self(action);
    }
}

/// Shows a transient message to the user.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

impl<F> Notifier for F
where
    F: FnMut(&str),
{
    fn notify(&mut self, message: &str) {
        self(message);
    }
}

/// Handler for `show_toast` actions; other kinds are logged and dropped.
#[derive(Debug)]
pub struct ToastDispatcher<N> {
    notifier: N,
}

impl<N: Notifier> ToastDispatcher<N> {
    /// Create a dispatcher that notifies through `notifier`.
    pub const fn new(notifier: N) -> Self {
        Self { notifier }
    }

    /// Give back the notifier.
    pub fn into_inner(self) -> N {
        self.notifier
    }
}

impl<N: Notifier> ActionHandler for ToastDispatcher<N> {
    fn dispatch(&mut self, action: &Action) {
        match Command::from_action(action) {
            Command::ShowToast { messages } => {
                for message in &messages {
                    self.notifier.notify(message);
                }
            }
            _ => emit_log(
                LogLevel::Debug,
                &format!("no toast for action kind {}", action.kind),
            ),
        }
    }
}
