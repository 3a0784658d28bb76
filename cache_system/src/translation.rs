//! Bounded LRU cache for translated queries
//!
//! Query translation is pure and deterministic, so a translated query can
//! be reused for as long as we care to keep it. This cache keeps the most
//! recently used translations up to a fixed capacity and evicts the least
//! recently used entry when full.

use crate::stats::CacheStats;
use config::CacheConfig;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

struct Slot<T> {
    value: T,
    last_used: u64,
}

/// Thread-safe LRU map from source queries to their translations
///
/// Lookups and insertions take the internal lock only briefly; callers are
/// expected to run the translation itself outside the lock and insert the
/// result afterwards. Two threads translating the same query concurrently
/// both succeed and the later insert wins, which is harmless because both
/// translations are identical.
pub struct TranslationCache<Q, T> {
    entries: Mutex<HashMap<Q, Slot<T>>>,
    capacity: usize,
    tick: AtomicU64,
    stats: CacheStats,
}

impl<Q, T> TranslationCache<Q, T>
where
    Q: Eq + Hash + Clone,
    T: Clone,
{
    /// Create a cache holding at most `capacity` translations
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            // A zero-capacity cache would evict on every insert
            capacity: capacity.max(1),
            tick: AtomicU64::new(0),
            stats: CacheStats::new(),
        }
    }

    /// Create a cache sized from the shared cache configuration
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::with_capacity(config.query_capacity)
    }

    /// Look up a cached translation, refreshing its recency on a hit
    pub fn get(&self, key: &Q) -> Option<T> {
        let Ok(mut entries) = self.entries.lock() else {
            // A poisoned lock degrades to a miss rather than an error
            self.stats.record_miss();
            return None;
        };

        match entries.get_mut(key) {
            Some(slot) => {
                slot.last_used = self.next_tick();
                self.stats.record_hit();
                Some(slot.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    /// Insert a translation, replacing any existing entry for the key
    ///
    /// When the cache is full and the key is new, the least recently used
    /// entry is evicted first.
    pub fn insert(&self, key: Q, value: T) {
        let Ok(mut entries) = self.entries.lock() else {
            return;
        };

        if let Some(slot) = entries.get_mut(&key) {
            slot.value = value;
            slot.last_used = self.next_tick();
            return;
        }

        if entries.len() >= self.capacity {
            // Linear scan is fine at the capacities this cache runs at
            let oldest = entries
                .iter()
                .min_by_key(|(_, slot)| slot.last_used)
                .map(|(key, _)| key.clone());
            if let Some(oldest) = oldest {
                entries.remove(&oldest);
                self.stats.record_eviction();
            }
        }

        entries.insert(
            key,
            Slot {
                value,
                last_used: self.next_tick(),
            },
        );
        self.stats.record_insertion();
    }

    /// Number of translations currently cached
    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of translations this cache will hold
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Hit/miss counters for this cache
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Drop all cached translations
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }

    fn next_tick(&self) -> u64 {
        self.tick.fetch_add(1, Ordering::Relaxed) + 1
    }
}

impl<Q, T> std::fmt::Debug for TranslationCache<Q, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let len = match self.entries.lock() {
            Ok(entries) => entries.len(),
            Err(_) => 0,
        };
        f.debug_struct("TranslationCache")
            .field("len", &len)
            .field("capacity", &self.capacity)
            .finish()
    }
}
