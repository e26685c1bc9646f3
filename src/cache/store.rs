//! Cache Store Module
//!
//! The bounded cache engine: a key index over an arena of records, ordered
//! by a recency list for LRU eviction, with lazy per-entry TTL expiry.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::cache::entry::CacheEntry;
use crate::cache::list::{Handle, RecencyList};
use crate::error::{CacheError, Result};

// == Slot ==
/// Arena cell owning one record. The key is kept alongside the entry so an
/// eviction found through the recency list can clean up the index.
#[derive(Debug)]
struct Slot<K, V> {
    key: K,
    entry: CacheEntry<V>,
}

// == Bounded Cache ==
/// Bounded key-value store with LRU eviction and per-entry TTL.
///
/// Holds at most `max_size` records. Writes beyond capacity evict the least
/// recently used record, purely by recency; stale records are removed lazily,
/// on the next `get`/`contains_key` that touches them. There is no
/// background sweep, so an expired record may linger until touched, evicted,
/// or cleared.
///
/// All operations are O(1). The structure is not internally synchronized;
/// multi-threaded hosts wrap the whole instance in a single coarse lock, as
/// [`crate::registry::CacheRegistry`] does.
#[derive(Debug)]
pub struct BoundedCache<K, V> {
    /// Key → arena handle, one entry per tracked record
    index: HashMap<K, Handle>,
    /// Record storage, addressed by the handles the recency list allocates
    slots: Vec<Option<Slot<K, V>>>,
    /// Recency ordering, head = most recently used
    order: RecencyList,
    /// Maximum number of records
    max_size: usize,
    /// TTL applied when `set` is called without an override
    default_ttl: Duration,
}

impl<K: Hash + Eq + Clone, V> BoundedCache<K, V> {
    // == Constructor ==
    /// Creates a cache holding at most `max_size` records, each living for
    /// `default_ttl` unless a `set` call overrides it.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidCapacity`] when `max_size` is zero: a
    /// cache that can never hold anything is a configuration error, caught
    /// at construction rather than surfaced as permanent misses.
    pub fn new(max_size: usize, default_ttl: Duration) -> Result<Self> {
        if max_size == 0 {
            return Err(CacheError::InvalidCapacity(max_size));
        }
        Ok(Self {
            index: HashMap::with_capacity(max_size),
            slots: Vec::with_capacity(max_size),
            order: RecencyList::with_capacity(max_size),
            max_size,
            default_ttl,
        })
    }

    // == Get ==
    /// Retrieves the value for `key`, promoting it to most recently used.
    ///
    /// Misses on absent keys. An expired record is removed from both the
    /// index and the recency list as a side effect and reported as a miss;
    /// a hit never returns a value past its expiry.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let idx = *self.index.get(key)?;
        if self.entry_at(idx)?.is_expired_at(Instant::now()) {
            self.discard(idx);
            debug!("lazily removed expired entry on get");
            return None;
        }
        self.order.touch(idx);
        self.entry_at(idx).map(|entry| &entry.value)
    }

    // == Set ==
    /// Stores `value` under `key`, expiring after `ttl` (the instance
    /// default when `None`).
    ///
    /// An already-tracked key, live or expired, is updated in place and
    /// promoted, without counting against capacity. A new key is inserted
    /// at the head of the recency order; when the cache is full, the least
    /// recently used record is evicted first, regardless of whether that
    /// record happens to be expired.
    pub fn set(&mut self, key: K, value: V, ttl: Option<Duration>) {
        let ttl = ttl.unwrap_or(self.default_ttl);

        if let Some(&idx) = self.index.get(&key) {
            if let Some(slot) = self.slots[idx].as_mut() {
                slot.entry = CacheEntry::new(value, ttl);
            }
            self.order.touch(idx);
            return;
        }

        if self.index.len() >= self.max_size {
            if let Some(tail) = self.order.pop_back() {
                if let Some(slot) = self.slots[tail].take() {
                    self.index.remove(&slot.key);
                    debug!(max_size = self.max_size, "evicted least recently used entry");
                }
            }
        }

        let idx = self.order.push_front();
        let slot = Slot {
            key: key.clone(),
            entry: CacheEntry::new(value, ttl),
        };
        if idx == self.slots.len() {
            self.slots.push(Some(slot));
        } else {
            self.slots[idx] = Some(slot);
        }
        self.index.insert(key, idx);
        debug_assert_eq!(self.index.len(), self.order.len());
    }

    // == Contains Key ==
    /// Reports whether `key` holds a live record, without promoting it.
    ///
    /// Same lazy-expiry semantics as [`get`](Self::get): an expired record
    /// is removed as a side effect and reported as absent.
    pub fn contains_key(&mut self, key: &K) -> bool {
        let Some(&idx) = self.index.get(key) else {
            return false;
        };
        let expired = self
            .entry_at(idx)
            .is_some_and(|entry| entry.is_expired_at(Instant::now()));
        if expired {
            self.discard(idx);
            debug!("lazily removed expired entry on contains_key");
            return false;
        }
        true
    }

    // == Remove ==
    /// Removes the record for `key`, live or expired, returning its value.
    ///
    /// Returns None, without side effects, when the key is absent.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let idx = self.index.remove(key)?;
        self.order.remove(idx);
        self.slots[idx].take().map(|slot| slot.entry.value)
    }

    // == Clear ==
    /// Drops every record, resetting the cache to empty. The instance
    /// remains usable; capacity and default TTL are unchanged.
    pub fn clear(&mut self) {
        self.index.clear();
        self.slots.clear();
        self.order.clear();
    }

    // == Length ==
    /// Returns the number of records currently tracked.
    ///
    /// Expired-but-untouched records are included: without a proactive
    /// sweep this is an upper bound on the number of live entries, not an
    /// exact live count.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    // == Is Empty ==
    /// Returns true if no records are tracked.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    // == Capacity ==
    /// Returns the maximum number of records.
    pub fn capacity(&self) -> usize {
        self.max_size
    }

    // == Default TTL ==
    /// Returns the TTL applied when `set` is called without an override.
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Remaining lifetime of the record for `key`, without promotion and
    /// without lazy removal. Zero once expired.
    pub fn ttl_remaining(&self, key: &K) -> Option<Duration> {
        let idx = *self.index.get(key)?;
        self.entry_at(idx)?.ttl_remaining_at(Instant::now())
    }

    // == Internal ==
    /// Entry at a handle. Always occupied for a handle held by the index.
    fn entry_at(&self, idx: Handle) -> Option<&CacheEntry<V>> {
        self.slots[idx].as_ref().map(|slot| &slot.entry)
    }

    /// Removes the record at `idx` from the index, the recency list, and
    /// the arena. Used for lazy expiry cleanup.
    fn discard(&mut self, idx: Handle) {
        if let Some(slot) = self.slots[idx].take() {
            self.index.remove(&slot.key);
            self.order.remove(idx);
        }
    }

    // == Invariant Checks ==
    /// Asserts structural agreement between the index and the recency list:
    /// same length, and the handles reachable from the list head are exactly
    /// the handles the index knows, each addressing an occupied slot.
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) {
        use std::collections::HashSet;

        assert_eq!(self.order.len(), self.index.len(), "list length != index size");

        let reachable: HashSet<Handle> = self.order.iter().collect();
        assert_eq!(reachable.len(), self.index.len(), "duplicate handles in list");

        for (key, &idx) in &self.index {
            assert!(reachable.contains(&idx), "indexed handle not reachable");
            let slot = self.slots[idx].as_ref().expect("indexed slot is empty");
            assert!(&slot.key == key, "slot key disagrees with index key");
        }
    }
}
