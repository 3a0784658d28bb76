//! Convenience re-exports for common cache-system usage

// Core cache system components
pub use crate::identity::IdentityCache;
pub use crate::stats::{CacheStats, CacheStatsSnapshot};
pub use crate::translation::TranslationCache;

// Re-export centralized config
pub use config::CacheConfig;

// Common external dependencies
pub use serde::{Deserialize, Serialize};
