//! In-process caches for the translating store
//!
//! This crate provides the two caches the translating store leans on:
//! a bounded LRU cache for translated queries and an identity map that
//! keeps one shared instance per object id, plus hit/miss statistics
//! shared by both.

pub mod identity;
pub mod prelude;
pub mod stats;
pub mod translation;

// Re-export centralized config
pub use config::CacheConfig;

pub use identity::IdentityCache;
pub use stats::{CacheStats, CacheStatsSnapshot};
pub use translation::TranslationCache;
