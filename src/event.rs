//! Event and log callback system.
//!
//! Hosts register callbacks to observe what the renderer decides. Every log
//! line is also forwarded to [`tracing`] so a subscriber picks it up without
//! any callback being installed.
//!
//! Callbacks run after the registry lock is released, so a callback may
//! render (and log) again or replace itself.

use std::sync::{Arc, Mutex, OnceLock};

/// Log level for diagnostic callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Event emitted when a tap resolves to an action.
pub const EVENT_ACTION_RESOLVED: &str = "action_resolved";

type EventCallback = Arc<dyn Fn(&str, &str) + Send + Sync + 'static>;
type LogCallback = Arc<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

fn event_callback() -> &'static Mutex<Option<EventCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<EventCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

fn log_callback() -> &'static Mutex<Option<LogCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<LogCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

/// Set the global event callback.
pub fn set_event_callback<F>(callback: F)
where
    F: Fn(&str, &str) + Send + Sync + 'static,
{
    if let Ok(mut guard) = event_callback().lock() {
        *guard = Some(Arc::new(callback));
    }
}

/// Remove the global event callback.
pub fn clear_event_callback() {
    if let Ok(mut guard) = event_callback().lock() {
        *guard = None;
    }
}

/// Emit an event to the registered callback.
pub fn emit_event(name: &str, data: &str) {
    tracing::trace!(target: "richlabel::event", event = name, data = data);
    let callback = event_callback().lock().ok().and_then(|guard| guard.clone());
    if let Some(callback) = callback {
        callback(name, data);
    }
}

/// Set the global log callback.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    if let Ok(mut guard) = log_callback().lock() {
        *guard = Some(Arc::new(callback));
    }
}

/// Remove the global log callback.
pub fn clear_log_callback() {
    if let Ok(mut guard) = log_callback().lock() {
        *guard = None;
    }
}

/// Emit a log line to `tracing` and the registered callback.
pub fn emit_log(level: LogLevel, message: &str) {
    match level {
        LogLevel::Debug => tracing::debug!(target: "richlabel", "{message}"),
        LogLevel::Info => tracing::info!(target: "richlabel", "{message}"),
        LogLevel::Warn => tracing::warn!(target: "richlabel", "{message}"),
        LogLevel::Error => tracing::error!(target: "richlabel", "{message}"),
    }
    let callback = log_callback().lock().ok().and_then(|guard| guard.clone());
    if let Some(callback) = callback {
        callback(level, message);
    }
}
