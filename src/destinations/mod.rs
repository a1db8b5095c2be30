//! Built-in destination implementations
//!
//! The dispatch engine only depends on the `Destination` trait; these are
//! the stock writers shipped with the crate.

#[cfg(feature = "console")]
pub mod console;
#[cfg(feature = "file")]
pub mod file;

#[cfg(feature = "console")]
pub use console::ConsoleDestination;
#[cfg(feature = "file")]
pub use file::FileDestination;
