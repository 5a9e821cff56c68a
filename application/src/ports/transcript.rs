//! Port for the persistent transcript log.
//!
//! Defines the [`TranscriptLog`] trait for recording every message the scene
//! appends (and the one in-place rewrite a rollover performs) to an
//! append-only audit/replay log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port mirrors the message pool
//! append-for-append in a machine-readable format.

use agora_domain::Message;
use serde_json::Value;

/// A structured transcript event.
pub struct TranscriptEvent {
    /// Event type identifier.
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl TranscriptEvent {
    /// A message was appended to the pool.
    pub fn appended(message: &Message) -> Self {
        Self {
            event_type: "message_appended",
            payload: serde_json::to_value(message).unwrap_or(Value::Null),
        }
    }

    /// The pool's last message was rewritten into a rollover summary.
    pub fn compressed(message: &Message) -> Self {
        Self {
            event_type: "turn_compressed",
            payload: serde_json::to_value(message).unwrap_or(Value::Null),
        }
    }
}

/// Append-only sink for transcript events.
///
/// The `record` method is intentionally synchronous and non-fallible so a
/// failing sink cannot disrupt the run; adapters log and swallow I/O errors.
pub trait TranscriptLog: Send + Sync {
    fn record(&self, event: TranscriptEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoTranscript;

impl TranscriptLog for NoTranscript {
    fn record(&self, _event: TranscriptEvent) {}
}
