//! Destination capability contract
//!
//! The dispatch engine depends only on this trait; concrete writers
//! (console, file, network, test doubles) live elsewhere. Destinations are
//! identity-bearing: the registry compares `Arc` instances, never contents,
//! so the same configuration registered through two different instances
//! counts as two destinations.

use super::entry::LogEntry;
use super::error::Result;
use super::filter::{Filter, FilterTarget};
use super::level::Level;
use super::queue::SerialQueue;

pub trait Destination: Send + Sync {
    /// Lowest severity this destination accepts.
    fn min_level(&self) -> Level {
        Level::Verbose
    }

    /// Delivery mode. Asynchronous destinations never block the dispatching
    /// caller; synchronous ones make it wait for `send` to complete.
    fn asynchronous(&self) -> bool {
        true
    }

    /// The destination's serialized delivery queue. `None` means the
    /// destination is currently unbound and the dispatcher skips it.
    fn queue(&self) -> Option<&SerialQueue>;

    fn filters(&self) -> &[Filter] {
        &[]
    }

    /// Whether any filter inspects message content. The dispatcher uses
    /// this to resolve the lazy message before eligibility is evaluated.
    fn has_message_filters(&self) -> bool {
        self.filters()
            .iter()
            .any(|f| f.target() == FilterTarget::Message)
    }

    /// Full eligibility predicate: level threshold plus every filter.
    /// `message` is `Some` whenever this destination declares message
    /// filters; for all other destinations it may still be unresolved.
    fn should_log(&self, level: Level, path: &str, function: &str, message: Option<&str>) -> bool {
        level >= self.min_level()
            && self
                .filters()
                .iter()
                .all(|f| f.passes(path, function, message))
    }

    /// Perform the actual write. Runs on the destination's queue; the
    /// returned result is destination-internal and ignored by the engine.
    fn send(&self, entry: &LogEntry) -> Result<()>;

    fn name(&self) -> &str {
        "destination"
    }
}

/// Shared state for destination implementations: threshold, delivery mode,
/// queue and filters, with builder-style configuration. Concrete
/// destinations embed one and delegate the trait accessors to it.
#[derive(Debug)]
pub struct DestinationCore {
    min_level: Level,
    asynchronous: bool,
    queue: Option<SerialQueue>,
    filters: Vec<Filter>,
}

impl DestinationCore {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            min_level: Level::Verbose,
            asynchronous: true,
            queue: Some(SerialQueue::new(label)),
            filters: Vec::new(),
        }
    }

    /// A core with no bound queue; the destination stays inactive until
    /// rebuilt with one.
    pub fn unbound() -> Self {
        Self {
            min_level: Level::Verbose,
            asynchronous: true,
            queue: None,
            filters: Vec::new(),
        }
    }

    #[must_use]
    pub fn min_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    #[must_use]
    pub fn synchronous(mut self) -> Self {
        self.asynchronous = false;
        self
    }

    #[must_use]
    pub fn asynchronous(mut self, yes: bool) -> Self {
        self.asynchronous = yes;
        self
    }

    #[must_use]
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn level_threshold(&self) -> Level {
        self.min_level
    }

    pub fn is_asynchronous(&self) -> bool {
        self.asynchronous
    }

    pub fn queue(&self) -> Option<&SerialQueue> {
        self.queue.as_ref()
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain {
        core: DestinationCore,
    }

    impl Destination for Plain {
        fn min_level(&self) -> Level {
            self.core.level_threshold()
        }
        fn asynchronous(&self) -> bool {
            self.core.is_asynchronous()
        }
        fn queue(&self) -> Option<&SerialQueue> {
            self.core.queue()
        }
        fn filters(&self) -> &[Filter] {
            self.core.filters()
        }
        fn send(&self, _entry: &LogEntry) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_default_eligibility_is_level_only() {
        let dest = Plain {
            core: DestinationCore::new("test").min_level(Level::Warning),
        };
        assert!(!dest.has_message_filters());
        assert!(!dest.should_log(Level::Info, "f.rs", "f()", None));
        assert!(dest.should_log(Level::Warning, "f.rs", "f()", None));
        assert!(dest.should_log(Level::Error, "f.rs", "f()", None));
    }

    #[test]
    fn test_message_filter_detection() {
        let dest = Plain {
            core: DestinationCore::new("test")
                .filter(Filter::contains(FilterTarget::Path, "core"))
                .filter(Filter::contains(FilterTarget::Message, "timeout")),
        };
        assert!(dest.has_message_filters());

        // Both filters must pass.
        assert!(dest.should_log(Level::Info, "src/core/a.rs", "f()", Some("timeout hit")));
        assert!(!dest.should_log(Level::Info, "src/core/a.rs", "f()", Some("all good")));
        assert!(!dest.should_log(Level::Info, "src/other.rs", "f()", Some("timeout hit")));
    }

    #[test]
    fn test_unbound_core_has_no_queue() {
        let dest = Plain {
            core: DestinationCore::unbound(),
        };
        assert!(dest.queue().is_none());
    }
}
