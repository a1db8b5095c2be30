//! Stress tests: many threads dispatching through a shared logger

use fanlog::prelude::*;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};

struct Sink {
    queue: SerialQueue,
    asynchronous: bool,
    sent: Mutex<Vec<String>>,
}

impl Sink {
    fn new(asynchronous: bool) -> Self {
        Self {
            queue: SerialQueue::new("sink"),
            asynchronous,
            sent: Mutex::new(Vec::new()),
        }
    }
}

impl Destination for Sink {
    fn asynchronous(&self) -> bool {
        self.asynchronous
    }
    fn queue(&self) -> Option<&SerialQueue> {
        Some(&self.queue)
    }
    fn send(&self, entry: &LogEntry) -> Result<()> {
        self.sent.lock().push(entry.message.clone());
        Ok(())
    }
}

fn wait_until(cond: impl Fn() -> bool, timeout: Duration) -> bool {
    let start = Instant::now();
    while start.elapsed() < timeout {
        if cond() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    cond()
}

#[test]
fn test_concurrent_dispatch_delivers_everything() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 200;

    let logger = Arc::new(Logger::new());
    let sink = Arc::new(Sink::new(true));
    logger.add_destination(sink.clone());

    let mut handles = vec![];
    for thread_id in 0..THREADS {
        let logger = Arc::clone(&logger);
        let handle = std::thread::spawn(move || {
            for i in 0..PER_THREAD {
                logger.info(
                    move || format!("t{} m{}", thread_id, i),
                    "stress.rs",
                    "worker()",
                    1,
                    None,
                );
            }
        });
        handles.push(handle);
    }
    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    assert!(wait_until(
        || sink.sent.lock().len() == THREADS * PER_THREAD,
        Duration::from_secs(5)
    ));

    // Per-thread order survives the fan-in: each thread's messages appear
    // in the order that thread dispatched them.
    let sent = sink.sent.lock().clone();
    for thread_id in 0..THREADS {
        let prefix = format!("t{} ", thread_id);
        let of_thread: Vec<&String> = sent.iter().filter(|m| m.starts_with(&prefix)).collect();
        let expected: Vec<String> = (0..PER_THREAD)
            .map(|i| format!("t{} m{}", thread_id, i))
            .collect();
        let of_thread: Vec<String> = of_thread.into_iter().cloned().collect();
        assert_eq!(of_thread, expected);
    }
}

#[test]
fn test_concurrent_registry_mutation_during_dispatch() {
    let logger = Arc::new(Logger::new());
    let stable = Arc::new(Sink::new(false));
    logger.add_destination(stable.clone());

    let writer = {
        let logger = Arc::clone(&logger);
        std::thread::spawn(move || {
            for i in 0..500 {
                logger.info(move || format!("m{}", i), "stress.rs", "writer()", 1, None);
            }
        })
    };

    let churner = {
        let logger = Arc::clone(&logger);
        std::thread::spawn(move || {
            for _ in 0..50 {
                let transient: Arc<dyn Destination> = Arc::new(Sink::new(true));
                logger.add_destination(Arc::clone(&transient));
                std::thread::sleep(Duration::from_micros(100));
                logger.remove_destination(&transient);
            }
        })
    };

    writer.join().expect("writer panicked");
    churner.join().expect("churner panicked");

    // The stable destination saw every event, in order.
    let sent = stable.sent.lock().clone();
    assert_eq!(sent.len(), 500);
    assert_eq!(sent[0], "m0");
    assert_eq!(sent[499], "m499");
}
