//! Core dispatch engine types and traits

pub mod destination;
pub mod dispatcher;
pub mod entry;
pub mod error;
pub mod filter;
pub mod level;
pub mod queue;
pub mod registry;

pub use destination::{Destination, DestinationCore};
pub use dispatcher::Logger;
pub use entry::LogEntry;
pub use error::{FanlogError, Result};
pub use filter::{Filter, FilterTarget};
pub use level::Level;
pub use queue::SerialQueue;
pub use registry::Registry;
