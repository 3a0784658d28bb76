//! Logical query construction
//!
//! This module provides the immutable query value the translating layer
//! works with.

use crate::query::filter::{QueryFilter, QueryValue};
use crate::query::ordering::SortOrder;
use crate::ObjectId;

/// Immutable, value-comparable logical query
///
/// A query names a root class, optionally projects individual fields
/// (an empty projection selects whole objects), and carries filters and
/// ordering. Pagination is not part of the query; it travels as arguments
/// to `execute`. Two structurally equal queries compare equal and hash
/// identically, which the translation cache relies on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query {
    pub(crate) from: String,
    pub(crate) select: Vec<String>,
    pub(crate) conditions: Vec<QueryFilter>,
    pub(crate) order_by: Vec<(String, SortOrder)>,
    pub(crate) distinct: bool,
}

impl Query {
    /// Query selecting whole objects of a class
    pub fn new(from: &str) -> Self {
        Self {
            from: from.to_string(),
            select: Vec::new(),
            conditions: Vec::new(),
            order_by: Vec::new(),
            distinct: false,
        }
    }

    /// The canonical lookup of one object by id
    ///
    /// Selects whole objects of the given base class where the id field
    /// equals the argument.
    pub fn for_object_id(base_class: &str, id: ObjectId) -> Self {
        Self::new(base_class).filter(QueryFilter::eq("id", QueryValue::Int(id)))
    }

    /// Project a field
    pub fn select(mut self, field: &str) -> Self {
        self.select.push(field.to_string());
        self
    }

    /// Add a filter condition
    pub fn filter(mut self, filter: QueryFilter) -> Self {
        self.conditions.push(filter);
        self
    }

    /// Add multiple filters (combined with AND)
    pub fn filters(mut self, filters: Vec<QueryFilter>) -> Self {
        self.conditions.extend(filters);
        self
    }

    /// Add ordering
    pub fn order_by(mut self, field: &str, order: SortOrder) -> Self {
        self.order_by.push((field.to_string(), order));
        self
    }

    /// Request distinct rows
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// The same query rooted at a different class
    ///
    /// Translators use this to rewrite the root class while leaving
    /// projections, filters, and ordering untouched.
    pub fn with_from(&self, from: &str) -> Self {
        let mut query = self.clone();
        query.from = from.to_string();
        query
    }

    /// Root class this query selects from
    pub fn from_class(&self) -> &str {
        &self.from
    }

    /// Projected fields (empty means whole objects)
    pub fn selected(&self) -> &[String] {
        &self.select
    }

    /// Filter conditions
    pub fn conditions(&self) -> &[QueryFilter] {
        &self.conditions
    }

    /// Ordering entries
    pub fn ordering(&self) -> &[(String, SortOrder)] {
        &self.order_by
    }

    /// Whether distinct rows were requested
    pub fn is_distinct(&self) -> bool {
        self.distinct
    }
}
