//! Logical query vocabulary
//!
//! This module provides the value-comparable query types that the
//! translating layer hashes, caches, and rewrites.

pub mod builder;
pub mod filter;
pub mod ordering;


// Re-export main types for convenience
pub use builder::Query;
pub use filter::{LogicalOperator, QueryCondition, QueryFilter, QueryOperator, QueryValue};
pub use ordering::SortOrder;
