//! Convenience re-exports for common object-store usage

// Core traits
pub use crate::traits::{ObjectStore, PersistenceBroker, Translator};

// Error types
pub use crate::errors::StoreError;

// Store implementations
pub use crate::memory::MemoryStore;
pub use crate::translating::{NamespaceTranslator, TranslatingStore};

// Data model
pub use crate::ObjectId;
pub use crate::model::Model;
pub use crate::object::DomainObject;
pub use crate::results::{Cell, ResultsInfo, ResultsRow};
pub use crate::value::Value;

// Query building
pub use crate::query::{Query, QueryFilter, QueryOperator, QueryValue, SortOrder};

// Broker surface types
pub use crate::traits::{ExplainPlan, RelationKind};

// Cache config (re-exported from cache_system)
pub use crate::CacheConfig;

// Common external dependencies that are frequently used
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
