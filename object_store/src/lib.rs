//! Object Store - Core data-access layer for StoreLens
//!
//! This crate provides the foundational types and traits for object store
//! operations, including the translating store decorator, query values,
//! and the translator and persistence-broker seams.

pub mod errors;
pub mod memory;
pub mod model;
pub mod object;
pub mod prelude;
pub mod query;
pub mod results;
pub mod traits;
pub mod translating;
pub mod value;

pub use cache_system::CacheConfig;
pub use errors::StoreError;
pub use memory::MemoryStore;
pub use model::Model;
pub use object::DomainObject;
pub use query::{Query, QueryFilter, QueryOperator, QueryValue, SortOrder};
pub use results::{Cell, ResultsInfo, ResultsRow};
pub use traits::*;
pub use translating::{NamespaceTranslator, TranslatingStore};
pub use value::Value;

/// Logical identifier carried by every domain object
pub type ObjectId = i64;
