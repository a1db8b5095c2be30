//! Destination registry
//!
//! The set of currently active destinations, unique by instance identity.
//! Iteration order is unspecified and carries no cross-destination
//! ordering guarantee. A single mutex is enough here: membership changes
//! are rare next to dispatch volume, and dispatch only holds the lock long
//! enough to snapshot the set.

use super::destination::Destination;
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Default)]
pub struct Registry {
    destinations: Mutex<Vec<Arc<dyn Destination>>>,
}

/// Identity comparison: same instance, not same configuration.
fn same_instance(a: &Arc<dyn Destination>, b: &Arc<dyn Destination>) -> bool {
    std::ptr::eq(
        Arc::as_ptr(a) as *const (),
        Arc::as_ptr(b) as *const (),
    )
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a destination. Returns false (no-op) when the same instance
    /// is already present.
    pub fn add(&self, destination: Arc<dyn Destination>) -> bool {
        let mut destinations = self.destinations.lock();
        if destinations.iter().any(|d| same_instance(d, &destination)) {
            return false;
        }
        destinations.push(destination);
        true
    }

    /// Unregister a destination. Returns false when it was not present.
    pub fn remove(&self, destination: &Arc<dyn Destination>) -> bool {
        let mut destinations = self.destinations.lock();
        match destinations.iter().position(|d| same_instance(d, destination)) {
            Some(index) => {
                destinations.swap_remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove every destination, resetting to a fresh state.
    pub fn remove_all(&self) {
        self.destinations.lock().clear();
    }

    pub fn count(&self) -> usize {
        self.destinations.lock().len()
    }

    /// Clone the current membership so dispatch can iterate without holding
    /// the lock across `send` calls.
    pub(crate) fn snapshot(&self) -> Vec<Arc<dyn Destination>> {
        self.destinations.lock().clone()
    }
}
