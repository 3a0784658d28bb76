//! Traits for data access
//!
//! This module contains the traits that define the store, translator, and
//! broker interfaces of the library.

pub mod broker;
pub mod core;
pub mod translator;

// Re-export all public items for convenience
pub use broker::{ExplainPlan, PersistenceBroker, RelationKind};
pub use core::ObjectStore;
pub use translator::Translator;
