//! Basic fan-out: console plus file, different thresholds.
//!
//! Run with: cargo run --example basic_usage

use fanlog::prelude::*;
use fanlog::{debug, error, info, warning};
use std::sync::Arc;

fn main() {
    let logger = fanlog::default_logger();

    let console = Arc::new(ConsoleDestination::new().synchronous());
    logger.add_destination(console);

    let file = FileDestination::new("demo.log")
        .expect("Failed to open demo.log")
        .with_min_level(Level::Warning);
    logger.add_destination(Arc::new(file));

    debug!(logger, "starting up");
    info!(logger, "listening on port {}", 8080);
    warning!(logger, "high memory usage: {}%", 91);
    error!(logger, "backend {} unreachable", "db-1");

    // Lazy messages: with only an error-level destination registered,
    // the format below is never evaluated.
    logger.remove_all_destinations();
    let picky = Arc::new(ConsoleDestination::new().with_min_level(Level::Error));
    logger.add_destination(picky);
    debug!(logger, "costly dump: {:?}", (0..1000).collect::<Vec<_>>());

    println!("done; warnings and errors are also in demo.log");
}
