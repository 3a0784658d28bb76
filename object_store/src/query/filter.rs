//! Query filter vocabulary
//!
//! This module provides the condition types used inside logical queries.
//! Everything here is a plain value: two structurally equal filters compare
//! equal and hash identically, which is what makes whole queries usable as
//! translation cache keys.

/// Literal values allowed inside query conditions
///
/// Floats are excluded by construction so that queries stay `Eq + Hash`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryValue {
    Null,
    Bool(bool),
    Int(i64),
    Text(String),
    List(Vec<QueryValue>),
}

impl From<String> for QueryValue {
    fn from(val: String) -> Self {
        QueryValue::Text(val)
    }
}

impl From<&str> for QueryValue {
    fn from(val: &str) -> Self {
        QueryValue::Text(val.to_string())
    }
}

impl From<i64> for QueryValue {
    fn from(val: i64) -> Self {
        QueryValue::Int(val)
    }
}

impl From<i32> for QueryValue {
    fn from(val: i32) -> Self {
        QueryValue::Int(val as i64)
    }
}

impl From<bool> for QueryValue {
    fn from(val: bool) -> Self {
        QueryValue::Bool(val)
    }
}

impl From<Vec<QueryValue>> for QueryValue {
    fn from(val: Vec<QueryValue>) -> Self {
        QueryValue::List(val)
    }
}

/// Query condition operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryOperator {
    Eq,        // =
    Ne,        // !=
    Gt,        // >
    Gte,       // >=
    Lt,        // <
    Lte,       // <=
    Like,      // pattern match
    In,        // membership
    IsNull,    // null check
    IsNotNull, // non-null check
}

/// Single condition on a field
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryCondition {
    pub field: String,
    pub operator: QueryOperator,
    pub value: Option<QueryValue>, // None for IsNull/IsNotNull
}

/// Logical operators for combining conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalOperator {
    And,
    Or,
}

/// Query filter that can be nested
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryFilter {
    Condition(QueryCondition),
    Group {
        operator: LogicalOperator,
        filters: Vec<QueryFilter>,
    },
}

impl QueryFilter {
    /// Create a simple condition
    pub fn condition(field: &str, operator: QueryOperator, value: Option<QueryValue>) -> Self {
        Self::Condition(QueryCondition {
            field: field.to_string(),
            operator,
            value,
        })
    }

    /// Create AND group
    pub fn and(filters: Vec<QueryFilter>) -> Self {
        Self::Group {
            operator: LogicalOperator::And,
            filters,
        }
    }

    /// Create OR group
    pub fn or(filters: Vec<QueryFilter>) -> Self {
        Self::Group {
            operator: LogicalOperator::Or,
            filters,
        }
    }

    /// Equal condition
    pub fn eq(field: &str, value: QueryValue) -> Self {
        Self::condition(field, QueryOperator::Eq, Some(value))
    }

    /// Not equal condition
    pub fn ne(field: &str, value: QueryValue) -> Self {
        Self::condition(field, QueryOperator::Ne, Some(value))
    }

    /// Greater than condition
    pub fn gt(field: &str, value: QueryValue) -> Self {
        Self::condition(field, QueryOperator::Gt, Some(value))
    }

    /// Greater than or equal condition
    pub fn gte(field: &str, value: QueryValue) -> Self {
        Self::condition(field, QueryOperator::Gte, Some(value))
    }

    /// Less than condition
    pub fn lt(field: &str, value: QueryValue) -> Self {
        Self::condition(field, QueryOperator::Lt, Some(value))
    }

    /// Less than or equal condition
    pub fn lte(field: &str, value: QueryValue) -> Self {
        Self::condition(field, QueryOperator::Lte, Some(value))
    }

    /// Pattern match condition
    pub fn like(field: &str, pattern: &str) -> Self {
        Self::condition(
            field,
            QueryOperator::Like,
            Some(QueryValue::Text(pattern.to_string())),
        )
    }

    /// Membership condition
    pub fn in_values(field: &str, values: Vec<QueryValue>) -> Self {
        Self::condition(field, QueryOperator::In, Some(QueryValue::List(values)))
    }

    /// Null check condition
    pub fn is_null(field: &str) -> Self {
        Self::condition(field, QueryOperator::IsNull, None)
    }

    /// Non-null check condition
    pub fn is_not_null(field: &str) -> Self {
        Self::condition(field, QueryOperator::IsNotNull, None)
    }
}
