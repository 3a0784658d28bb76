//! Identity map for translated objects
//!
//! The translating store must hand out one shared instance per object id:
//! two results that refer to the same id must compare equal by pointer,
//! not just by value. This map records the canonical instance for each id.
//!
//! Unlike the translation cache there is no internal eviction. The store
//! that owns the map decides when entries are removed, normally in response
//! to writes or external invalidation.

use crate::stats::CacheStats;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::RwLock;

/// Thread-safe map from object ids to their canonical instances
///
/// Inserts are unconditional: translating the same id again replaces the
/// previous instance, so the map always holds the most recently translated
/// one. Earlier result rows keep whatever instance they were built with.
pub struct IdentityCache<K, V> {
    entries: RwLock<HashMap<K, V>>,
    stats: CacheStats,
}

impl<K, V> IdentityCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    /// Create an empty identity map
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            stats: CacheStats::new(),
        }
    }

    /// Look up the canonical instance for an id
    pub fn get(&self, key: &K) -> Option<V> {
        let Ok(entries) = self.entries.read() else {
            // A poisoned lock degrades to a miss rather than an error
            self.stats.record_miss();
            return None;
        };

        match entries.get(key) {
            Some(value) => {
                self.stats.record_hit();
                Some(value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    /// Record the canonical instance for an id, returning the displaced one
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        let Ok(mut entries) = self.entries.write() else {
            return None;
        };
        self.stats.record_insertion();
        entries.insert(key, value)
    }

    /// Remove an id from the map, returning its instance if present
    pub fn remove(&self, key: &K) -> Option<V> {
        let Ok(mut entries) = self.entries.write() else {
            return None;
        };
        let removed = entries.remove(key);
        if removed.is_some() {
            self.stats.record_eviction();
        }
        removed
    }

    /// Whether an id currently has a canonical instance
    pub fn contains(&self, key: &K) -> bool {
        self.entries
            .read()
            .map(|entries| entries.contains_key(key))
            .unwrap_or(false)
    }

    /// Number of ids currently mapped
    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    /// Whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Hit/miss counters for this map
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Drop every mapping
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }
}

impl<K, V> Default for IdentityCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> std::fmt::Debug for IdentityCache<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let len = match self.entries.read() {
            Ok(entries) => entries.len(),
            Err(_) => 0,
        };
        f.debug_struct("IdentityCache").field("len", &len).finish()
    }
}
