//! # StoreLens
//!
//! A transparent query-translation layer for object stores: queries written
//! against a logical model are rewritten to the physical model of an
//! underlying store, executed there, and the results translated back, with
//! memoized query translations and one shared instance per object id.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use storelens::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // The physical model names classes the way the backing store does
//!     let physical = Model::new("warehouse", "warehouse.Entity", &["warehouse.Book"]);
//!     let logical = Model::new("library", "Entity", &["Book"]);
//!
//!     let mut registry = default_registry();
//!     registry.register_store("main".to_string(), Arc::new(MemoryStore::new(physical)))?;
//!
//!     let config = AppConfig::from_toml(
//!         r#"
//!         [store]
//!         os = "main"
//!         translator_class = "namespace"
//!         "#,
//!     )?;
//!
//!     let store = registry.open_translating_store(Arc::new(logical), &config)?;
//!
//!     let rows = store
//!         .execute(&Query::new("Book"), 0, 100, true, false, store.sequence())
//!         .await?;
//!     println!("fetched {} rows", rows.len());
//!
//!     Ok(())
//! }
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod core;
pub mod errors;
pub mod prelude;

// Re-export the main public types for convenience
pub use core::{StoreLens, TranslatorFactory, default_registry};
pub use errors::StoreLensError;

// Re-export centralized config
pub use config::{AppConfig, CacheConfig, StoreConfig, TelemetryConfig};

// Re-export internal crates backing the public API
pub use cache_system;
pub use object_store;
pub use telemetry;

// Re-export external dependencies used in public API
pub use async_trait;
