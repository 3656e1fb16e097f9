//! Ordered listener lists
//!
//! Listeners are kept in registration order and all of them run for a
//! matching key. Registering a new listener never displaces an older one,
//! so behavior added by the host keeps firing before anything layered on
//! top of it.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(1);

/// Handle returned on registration, used to remove a single listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    fn next() -> Self {
        Self(NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

struct Entry<K, E> {
    id: ListenerId,
    key: K,
    namespace: Option<String>,
    callback: Box<dyn FnMut(&E)>,
}

/// Listeners for events of type `E`, keyed by `K` (a phase, or a target and kind)
pub struct Listeners<K, E> {
    entries: Vec<Entry<K, E>>,
}

impl<K: PartialEq, E> Listeners<K, E> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a listener for `key`. It runs after every listener already registered.
    pub fn add(
        &mut self,
        key: K,
        namespace: Option<&str>,
        callback: Box<dyn FnMut(&E)>,
    ) -> ListenerId {
        let id = ListenerId::next();
        self.entries.push(Entry {
            id,
            key,
            namespace: namespace.map(str::to_string),
            callback,
        });
        id
    }

    /// Remove one listener. Returns false if it was already gone.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Remove every listener registered under `namespace`, returning how many were dropped
    pub fn remove_namespace(&mut self, namespace: &str) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|entry| entry.namespace.as_deref() != Some(namespace));
        before - self.entries.len()
    }

    /// Invoke every listener registered for `key`, oldest first
    pub fn dispatch(&mut self, key: &K, event: &E) -> usize {
        let mut invoked = 0;
        for entry in self.entries.iter_mut().filter(|entry| entry.key == *key) {
            (entry.callback)(event);
            invoked += 1;
        }
        invoked
    }

    pub fn count_for(&self, key: &K) -> usize {
        self.entries.iter().filter(|entry| entry.key == *key).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: PartialEq, E> Default for Listeners<K, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, E> fmt::Debug for Listeners<K, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(
                self.entries
                    .iter()
                    .map(|entry| (entry.id, &entry.key, &entry.namespace)),
            )
            .finish()
    }
}

#[cfg(test)]
#[path = "listeners_tests.rs"]
mod listeners_tests;
