//! Observer registry for state-change notifications
//!
//! `ExerciseStore` notifies every registered observer with the settled
//! snapshot after each successful mutation. `subscribe` returns a
//! [`Subscription`]; calling `unsubscribe` or dropping it removes the
//! observer.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use crate::model::Snapshot;

/// Callback invoked with the snapshot taken after a mutation
pub type Observer = Arc<dyn Fn(&Snapshot) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    observers: BTreeMap<u64, Observer>,
}

/// Lock the registry, recovering it if an earlier holder panicked
///
/// Every registry update is a single map insert or remove, so a poisoned
/// registry is still consistent.
fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Set of subscribed observers
#[derive(Clone, Default)]
pub struct Observers {
    inner: Arc<Mutex<Registry>>,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `observer`; it stays registered while the returned handle lives
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&Snapshot) + Send + Sync + 'static,
    {
        let mut registry = lock(&self.inner);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.observers.insert(id, Arc::new(observer));
        drop(registry);

        Subscription {
            id,
            registry: Arc::downgrade(&self.inner),
        }
    }

    /// Call every observer in subscription order
    ///
    /// The registry lock is released before any callback runs, so an observer
    /// may subscribe or unsubscribe without deadlocking.
    pub fn notify(&self, snapshot: &Snapshot) {
        let observers: Vec<Observer> = lock(&self.inner).observers.values().cloned().collect();

        for observer in observers {
            observer(snapshot);
        }
    }

    pub fn len(&self) -> usize {
        lock(&self.inner).observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers").field("len", &self.len()).finish()
    }
}

/// Handle returned by [`Observers::subscribe`]
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    /// Remove the observer now
    pub fn unsubscribe(self) {
        // Drop does the work
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            lock(&registry).observers.remove(&self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_notify_reaches_subscriber() {
        let observers = Observers::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let _sub = observers.subscribe(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        observers.notify(&Snapshot::default());
        observers.notify(&Snapshot::default());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let observers = Observers::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let sub = observers.subscribe(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        sub.unsubscribe();
        observers.notify(&Snapshot::default());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(observers.is_empty());
    }

    #[test]
    fn test_subscription_outliving_registry_is_harmless() {
        let observers = Observers::new();
        let sub = observers.subscribe(|_| {});
        drop(observers);
        drop(sub);
    }

    #[test]
    fn test_poisoned_registry_keeps_real_ids() {
        let observers = Observers::new();
        let first = observers.subscribe(|_| {});

        let inner = Arc::clone(&observers.inner);
        let _ = std::thread::spawn(move || {
            let _guard = inner.lock().unwrap();
            panic!("poison the registry");
        })
        .join();
        assert!(observers.inner.is_poisoned());

        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let second = observers.subscribe(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(observers.len(), 2);

        drop(first);
        assert_eq!(observers.len(), 1);
        observers.notify(&Snapshot::default());
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        second.unsubscribe();
        assert!(observers.is_empty());
    }
}
