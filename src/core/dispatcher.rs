//! The dispatch engine
//!
//! `Logger` routes each log call through the registry: per destination it
//! checks the bound queue, evaluates level and content filters, resolves
//! the lazy message at most once per call, and hands the finished entry to
//! the destination's serialized queue in its declared delivery mode.

use super::destination::Destination;
use super::entry::LogEntry;
use super::level::Level;
use super::registry::Registry;
use chrono::Utc;
use std::sync::Arc;

pub struct Logger {
    registry: Registry,
}

impl Logger {
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
        }
    }

    // --- Registry surface ---

    /// Register a destination; false when the same instance is already present.
    pub fn add_destination(&self, destination: Arc<dyn Destination>) -> bool {
        self.registry.add(destination)
    }

    /// Unregister a destination; false when it was not registered.
    pub fn remove_destination(&self, destination: &Arc<dyn Destination>) -> bool {
        self.registry.remove(destination)
    }

    /// Start fresh: drop every registered destination.
    pub fn remove_all_destinations(&self) {
        self.registry.remove_all();
    }

    pub fn count_destinations(&self) -> usize {
        self.registry.count()
    }

    // --- Leveled entry points ---

    /// Log something generally unimportant (lowest priority).
    pub fn verbose<F>(&self, message: F, file: &str, function: &str, line: u32, context: Option<serde_json::Value>)
    where
        F: FnOnce() -> String,
    {
        self.dispatch(Level::Verbose, message, file, function, line, context);
    }

    /// Log something which helps during debugging (low priority).
    pub fn debug<F>(&self, message: F, file: &str, function: &str, line: u32, context: Option<serde_json::Value>)
    where
        F: FnOnce() -> String,
    {
        self.dispatch(Level::Debug, message, file, function, line, context);
    }

    /// Log something of interest which is not an issue (normal priority).
    pub fn info<F>(&self, message: F, file: &str, function: &str, line: u32, context: Option<serde_json::Value>)
    where
        F: FnOnce() -> String,
    {
        self.dispatch(Level::Info, message, file, function, line, context);
    }

    /// Log something which may cause big trouble soon (high priority).
    pub fn warning<F>(&self, message: F, file: &str, function: &str, line: u32, context: Option<serde_json::Value>)
    where
        F: FnOnce() -> String,
    {
        self.dispatch(Level::Warning, message, file, function, line, context);
    }

    /// Log something which will keep you awake at night (highest priority).
    pub fn error<F>(&self, message: F, file: &str, function: &str, line: u32, context: Option<serde_json::Value>)
    where
        F: FnOnce() -> String,
    {
        self.dispatch(Level::Error, message, file, function, line, context);
    }

    /// Generic entry point with an explicit level.
    pub fn log<F>(
        &self,
        level: Level,
        message: F,
        file: &str,
        function: &str,
        line: u32,
        context: Option<serde_json::Value>,
    ) where
        F: FnOnce() -> String,
    {
        self.dispatch(level, message, file, function, line, context);
    }

    // --- Dispatch core ---

    /// Route one event through every registered destination.
    ///
    /// The message producer runs at most once per call, shared across all
    /// destinations that need its value, and not at all when every
    /// destination rejects the event on level/path/function alone.
    /// Synchronous destinations block this call until their `send`
    /// completes; asynchronous ones only get the job queued. Per-destination
    /// delivery failures are not surfaced.
    fn dispatch<F>(
        &self,
        level: Level,
        message: F,
        file: &str,
        function: &str,
        line: u32,
        context: Option<serde_json::Value>,
    ) where
        F: FnOnce() -> String,
    {
        let thread = thread_label();
        let function = strip_params(function);

        let mut thunk = Some(message);
        let mut resolved: Option<String> = None;
        let mut entry: Option<Arc<LogEntry>> = None;

        for destination in self.registry.snapshot() {
            let Some(queue) = destination.queue() else {
                continue;
            };

            // A destination filtering on content needs the message before
            // its eligibility can be decided.
            if resolved.is_none() && destination.has_message_filters() {
                resolved = thunk.take().map(|produce| produce());
            }

            if !destination.should_log(level, file, &function, resolved.as_deref()) {
                continue;
            }

            // Eligible destinations always receive a concrete string.
            if resolved.is_none() {
                resolved = thunk.take().map(|produce| produce());
            }

            let entry = Arc::clone(entry.get_or_insert_with(|| {
                Arc::new(LogEntry {
                    level,
                    message: resolved.clone().unwrap_or_default(),
                    thread: thread.clone(),
                    file: file.to_string(),
                    function: function.clone(),
                    line,
                    timestamp: Utc::now(),
                    context: context.clone(),
                })
            }));

            let target = Arc::clone(&destination);
            let job = move || {
                let _ = target.send(&entry);
            };

            if destination.asynchronous() {
                queue.exec_async(job);
            } else {
                queue.exec_sync(job);
            }
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve a label for the calling thread. The main thread and targets
/// without thread introspection yield an empty label; unnamed threads fall
/// back to an opaque id.
fn thread_label() -> String {
    let current = std::thread::current();
    match current.name() {
        Some("main") => String::new(),
        Some(name) => name.to_string(),
        None => format!("{:?}", current.id()),
    }
}

/// Truncate a function signature at its parameter list and append an empty
/// one, so call-site identity is stable regardless of argument labels:
/// `doWork(x:y:)` becomes `doWork()`.
pub(crate) fn strip_params(function: &str) -> String {
    let name = function.split('(').next().unwrap_or(function);
    format!("{}()", name)
}
