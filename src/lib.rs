//! # Fanlog
//!
//! A process-wide log fan-out engine: application code emits leveled
//! events once and the engine routes each one to zero or more registered
//! destinations, applying per-destination level and content filters and
//! delivering synchronously or asynchronously on each destination's own
//! serialized queue.
//!
//! ## Features
//!
//! - **Lazy messages**: the message producer runs at most once per log
//!   call, and not at all when every destination filters the event out
//! - **Per-destination ordering**: each destination sees events in
//!   dispatch order, whatever its delivery mode
//! - **Thread safe**: one registry shared across the whole process
//! - **Best effort**: a log call always returns; destination write
//!   failures stay inside the destination

pub mod core;
pub mod destinations;
pub mod macros;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::destinations::ConsoleDestination;
    #[cfg(feature = "file")]
    pub use crate::destinations::FileDestination;
    pub use crate::core::{
        Destination, DestinationCore, FanlogError, Filter, FilterTarget, Level, LogEntry, Logger,
        Registry, Result, SerialQueue,
    };
    pub use crate::default_logger;
}

#[cfg(feature = "console")]
pub use crate::destinations::ConsoleDestination;
#[cfg(feature = "file")]
pub use crate::destinations::FileDestination;
pub use crate::core::{
    Destination, DestinationCore, FanlogError, Filter, FilterTarget, Level, LogEntry, Logger,
    Registry, Result, SerialQueue,
};

use std::sync::OnceLock;

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// The process-wide default logger, created once on first use.
///
/// The engine itself has no hidden global state; `Logger::new()` gives an
/// independent instance that can be passed around explicitly. This
/// accessor only provides the "one logical registry per process"
/// convenience.
pub fn default_logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(Logger::new)
}
