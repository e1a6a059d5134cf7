//! Per-key mutual exclusion

use dashmap::DashMap;
use parking_lot::Mutex;
use std::hash::Hash;
use std::sync::Arc;

/// A lazily populated map of key -> mutex.
///
/// Holders of different keys never contend; there is no global lock. A slot
/// lives only while somebody holds or waits on it, so the map stays as large
/// as the set of keys currently in use.
pub(crate) struct KeyedLocks<K: Eq + Hash> {
    slots: DashMap<K, Arc<Mutex<()>>>,
}

impl<K: Eq + Hash + Clone> KeyedLocks<K> {
    pub(crate) fn new() -> Self {
        Self {
            slots: DashMap::new(),
        }
    }

    /// Run `f` while holding the lock for `key`.
    ///
    /// `f` must not await; the guard is a blocking mutex.
    pub(crate) fn with<R>(&self, key: &K, f: impl FnOnce() -> R) -> R {
        // Clone the slot out so the map shard is released before blocking.
        let slot = Arc::clone(self.slots.entry(key.clone()).or_default().value());
        let result = {
            let _guard = slot.lock();
            f()
        };
        drop(slot);

        // Clones are only taken under the shard lock, so a count of one here
        // means no other caller holds or waits on this slot.
        self.slots
            .remove_if(key, |_, slot| Arc::strong_count(slot) == 1);
        result
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }
}
