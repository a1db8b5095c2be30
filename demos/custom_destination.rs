//! Implementing the Destination contract for a custom sink.
//!
//! Run with: cargo run --example custom_destination

use fanlog::prelude::*;
use parking_lot::Mutex;
use std::sync::Arc;

/// Keeps the most recent entries in memory, like a crash-report ring.
struct RingBuffer {
    queue: SerialQueue,
    capacity: usize,
    entries: Mutex<Vec<LogEntry>>,
}

impl RingBuffer {
    fn new(capacity: usize) -> Self {
        Self {
            queue: SerialQueue::new("ring"),
            capacity,
            entries: Mutex::new(Vec::new()),
        }
    }

    fn dump(&self) -> Vec<LogEntry> {
        self.entries.lock().clone()
    }
}

impl Destination for RingBuffer {
    fn asynchronous(&self) -> bool {
        false
    }

    fn queue(&self) -> Option<&SerialQueue> {
        Some(&self.queue)
    }

    fn send(&self, entry: &LogEntry) -> Result<()> {
        let mut entries = self.entries.lock();
        if entries.len() == self.capacity {
            entries.remove(0);
        }
        entries.push(entry.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "ring"
    }
}

fn main() {
    let logger = Logger::new();
    let ring = Arc::new(RingBuffer::new(3));
    logger.add_destination(ring.clone());

    for i in 0..10 {
        fanlog::info!(logger, "event {}", i);
    }

    // Only the last three survive.
    for entry in ring.dump() {
        println!("{} {}", entry.level, entry.message);
    }
}
