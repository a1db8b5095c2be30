//! Serialized delivery queues
//!
//! Each destination owns a `SerialQueue`: a dedicated worker thread
//! draining a channel of jobs in FIFO order. The queue is the only
//! ordering mechanism the engine guarantees; two events dispatched to the
//! same destination run their `send` calls in dispatch order, never
//! interleaved, whether delivery is synchronous or asynchronous.

use crossbeam_channel::{bounded, unbounded, Sender};
use std::thread::{self, JoinHandle};

type Job = Box<dyn FnOnce() + Send + 'static>;

#[derive(Debug)]
pub struct SerialQueue {
    sender: Option<Sender<Job>>,
    worker: Option<JoinHandle<()>>,
    label: String,
}

impl SerialQueue {
    /// Spawn the worker thread backing this queue.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        let (sender, receiver) = unbounded::<Job>();

        let worker_label = label.clone();
        let worker = thread::spawn(move || {
            while let Ok(job) = receiver.recv() {
                // A panicking send must not take the whole queue down with it.
                let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(job));
                if outcome.is_err() {
                    eprintln!("[fanlog] delivery job panicked on queue '{}'", worker_label);
                }
            }
            // Channel closed: all pending jobs drained, worker exits.
        });

        Self {
            sender: Some(sender),
            worker: Some(worker),
            label,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Schedule a job and return immediately. Enqueueing onto a queue whose
    /// worker is gone is a silent no-op.
    pub fn exec_async(&self, job: impl FnOnce() + Send + 'static) {
        if let Some(ref sender) = self.sender {
            let _ = sender.send(Box::new(job));
        }
    }

    /// Schedule a job and block until the worker has run it to completion.
    /// Jobs already queued ahead of it run first.
    pub fn exec_sync(&self, job: impl FnOnce() + Send + 'static) {
        let Some(ref sender) = self.sender else {
            return;
        };

        let (done_tx, done_rx) = bounded::<()>(1);
        let wrapped: Job = Box::new(move || {
            job();
            let _ = done_tx.send(());
        });

        if sender.send(wrapped).is_ok() {
            // If the job panics, done_tx is dropped without sending and
            // recv() returns an error; either way the caller unblocks.
            let _ = done_rx.recv();
        }
    }
}

impl Drop for SerialQueue {
    fn drop(&mut self) {
        // Closing the channel lets the worker drain remaining jobs and exit.
        drop(self.sender.take());

        if let Some(worker) = self.worker.take() {
            // The final async job can drop the owning destination on the
            // worker thread itself; joining from there would deadlock.
            if worker.thread().id() != thread::current().id() {
                let _ = worker.join();
            }
        }
    }
}
