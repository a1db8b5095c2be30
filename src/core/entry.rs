//! Log entry structure

use super::level::Level;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A fully resolved log event as handed to `Destination::send`.
///
/// Entries are ephemeral: one is built per dispatch call (only if at least
/// one destination accepts the event) and shared across all eligible
/// destinations. The message is always a concrete string by the time an
/// entry exists; destinations never see the caller's lazy producer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: Level,
    pub message: String,
    /// Label of the emitting thread; empty on the main thread or on
    /// targets without thread introspection.
    pub thread: String,
    pub file: String,
    /// Canonical call-site function, parameter list stripped to `name()`.
    pub function: String,
    pub line: u32,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,
}

impl LogEntry {
    pub fn new(level: Level, message: String) -> Self {
        Self {
            level,
            message,
            thread: String::new(),
            file: String::new(),
            function: String::new(),
            line: 0,
            timestamp: Utc::now(),
            context: None,
        }
    }

    pub fn with_location(mut self, file: &str, function: &str, line: u32) -> Self {
        self.file = file.to_string();
        self.function = function.to_string();
        self.line = line;
        self
    }

    pub fn with_thread(mut self, thread: impl Into<String>) -> Self {
        self.thread = thread.into();
        self
    }

    pub fn with_context(mut self, context: serde_json::Value) -> Self {
        self.context = Some(context);
        self
    }

    /// File name component of the source path, for compact formats.
    pub fn file_name(&self) -> &str {
        self.file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.file.as_str())
    }
}
