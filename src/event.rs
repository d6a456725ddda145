//! Event and log callback hooks.
//!
//! The engine has no opinion about where diagnostics go; a host (TUI,
//! GUI, FFI shim) registers callbacks and the crate reports through them.
//! [`Document`](crate::Document) emits an `action:applied` event after
//! each successful phase-one apply and logs rejected identifiers.

use std::sync::{Mutex, OnceLock};

/// Log level for debug callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

type EventCallback = Box<dyn Fn(&str, &str) + Send + Sync + 'static>;
type LogCallback = Box<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

fn event_slot() -> &'static Mutex<Option<EventCallback>> {
    static SLOT: OnceLock<Mutex<Option<EventCallback>>> = OnceLock::new();
    SLOT.get_or_init(|| Mutex::new(None))
}

fn log_slot() -> &'static Mutex<Option<LogCallback>> {
    static SLOT: OnceLock<Mutex<Option<LogCallback>>> = OnceLock::new();
    SLOT.get_or_init(|| Mutex::new(None))
}

/// Set the global event callback. Events carry a name and a payload
/// (for `action:applied`, the wire identifier of the action).
pub fn set_event_callback<F>(callback: F)
where
    F: Fn(&str, &str) + Send + Sync + 'static,
{
    let mut guard = event_slot().lock().expect("event callback lock");
    *guard = Some(Box::new(callback));
}

/// Emit an event to the registered callback, if any.
pub fn emit_event(name: &str, payload: &str) {
    if let Ok(guard) = event_slot().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(name, payload);
        }
    }
}

/// Set the global log callback.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    let mut guard = log_slot().lock().expect("log callback lock");
    *guard = Some(Box::new(callback));
}

/// Emit a log line to the registered callback, if any.
pub fn emit_log(level: LogLevel, message: &str) {
    if let Ok(guard) = log_slot().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(level, message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_event_callback() {
        let hits = Arc::new(AtomicUsize::new(0));
        let hits_clone = Arc::clone(&hits);
        set_event_callback(move |name, payload| {
            assert_eq!(name, "action:applied");
            assert_eq!(payload, "bold");
            hits_clone.fetch_add(1, Ordering::SeqCst);
        });
        emit_event("action:applied", "bold");
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_log_callback() {
        set_log_callback(|level, msg| {
            assert_eq!(level, LogLevel::Warn);
            assert!(msg.contains("strike"));
        });
        emit_log(LogLevel::Warn, "rejected action: strike");
    }
}
