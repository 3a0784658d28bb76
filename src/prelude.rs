//! Convenience re-exports for common StoreLens usage
//!
//! This prelude module re-exports the most commonly used items from the StoreLens ecosystem,
//! making it easier to import everything you need with a single use statement.
//!
//! # Example
//!
//! ```rust
//! use storelens::prelude::*;
//!
//! // Now you have access to all the common StoreLens types and traits
//! ```

// Core StoreLens components
pub use crate::core::{StoreLens, TranslatorFactory, default_registry};
pub use crate::errors::StoreLensError;

// Re-export centralized config
pub use config::{AppConfig, CacheConfig, StoreConfig, TelemetryConfig};

// Re-export commonly used object-store types for convenience
pub use object_store::prelude::*;

// Re-export object_store module for qualified paths
pub use object_store;

// Re-export telemetry for lookup sampling
pub use telemetry::prelude::*;

// Re-export cache system
pub use cache_system::prelude::*;

// Common external dependencies
pub use async_trait;
pub use tokio;
