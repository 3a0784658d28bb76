//! Low-level persistence broker contract
//!
//! The relational engine underneath a physical store is an external
//! collaborator; this module is the whole surface a broker-backed store
//! implementation must satisfy.

use crate::errors::StoreError;
use crate::query::Query;
use crate::results::ResultsRow;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Parsed EXPLAIN summary for a paginated query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplainPlan {
    /// Estimated rows in the paginated window
    pub rows: usize,
    /// Estimated time to the first row, in milliseconds
    pub start_ms: u64,
    /// Estimated time to the complete window, in milliseconds
    pub complete_ms: u64,
}

/// Classification of a structural field between two classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationKind {
    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany,
    NotARelation,
}

/// Low-level relational capability behind a broker-backed store
#[async_trait]
pub trait PersistenceBroker: Send + Sync {
    /// Handle to the underlying database connection
    type Connection;

    /// Run a query, returning raw rows `start..start + limit`
    async fn execute(
        &self,
        query: &Query,
        start: usize,
        limit: usize,
    ) -> Result<Vec<ResultsRow>, StoreError>;

    /// EXPLAIN a paginated query without running it
    async fn explain(
        &self,
        query: &Query,
        start: usize,
        limit: usize,
    ) -> Result<ExplainPlan, StoreError>;

    /// COUNT(*) for a query
    async fn count(&self, query: &Query) -> Result<usize, StoreError>;

    /// The connection this broker executes against
    fn database(&self) -> &Self::Connection;

    /// Swap the connection this broker executes against
    fn set_database(&mut self, connection: Self::Connection);

    /// Classify the structural field `field_name` on `class_name`
    fn describe_relation(&self, class_name: &str, field_name: &str) -> RelationKind;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::Cell;
    use crate::value::Value;

    struct FixtureBroker {
        connection: String,
        rows: Vec<ResultsRow>,
    }

    #[async_trait]
    impl PersistenceBroker for FixtureBroker {
        type Connection = String;

        async fn execute(
            &self,
            _query: &Query,
            start: usize,
            limit: usize,
        ) -> Result<Vec<ResultsRow>, StoreError> {
            let end = (start + limit).min(self.rows.len());
            if start >= end {
                return Ok(Vec::new());
            }
            Ok(self.rows[start..end].to_vec())
        }

        async fn explain(
            &self,
            _query: &Query,
            start: usize,
            limit: usize,
        ) -> Result<ExplainPlan, StoreError> {
            let end = (start + limit).min(self.rows.len());
            Ok(ExplainPlan {
                rows: end.saturating_sub(start),
                start_ms: 1,
                complete_ms: 2,
            })
        }

        async fn count(&self, _query: &Query) -> Result<usize, StoreError> {
            Ok(self.rows.len())
        }

        fn database(&self) -> &String {
            &self.connection
        }

        fn set_database(&mut self, connection: String) {
            self.connection = connection;
        }

        fn describe_relation(&self, class_name: &str, field_name: &str) -> RelationKind {
            match (class_name, field_name) {
                ("Book", "author") => RelationKind::ManyToOne,
                ("Author", "books") => RelationKind::OneToMany,
                ("Book", "title") => RelationKind::NotARelation,
                _ => RelationKind::NotARelation,
            }
        }
    }

    fn scalar_row(n: i64) -> ResultsRow {
        ResultsRow::new(vec![Cell::Value(Value::Int(n))])
    }

    #[tokio::test]
    async fn test_broker_contract_is_implementable() {
        let mut broker = FixtureBroker {
            connection: "primary".to_string(),
            rows: vec![scalar_row(1), scalar_row(2), scalar_row(3)],
        };
        let query = Query::new("Book");

        let window = broker.execute(&query, 1, 5).await.unwrap();
        assert_eq!(window, vec![scalar_row(2), scalar_row(3)]);

        let plan = broker.explain(&query, 0, 2).await.unwrap();
        assert_eq!(plan.rows, 2);

        assert_eq!(broker.count(&query).await.unwrap(), 3);

        assert_eq!(broker.database(), "primary");
        broker.set_database("replica".to_string());
        assert_eq!(broker.database(), "replica");
    }

    #[test]
    fn test_relation_classification() {
        let broker = FixtureBroker {
            connection: "primary".to_string(),
            rows: Vec::new(),
        };

        assert_eq!(broker.describe_relation("Book", "author"), RelationKind::ManyToOne);
        assert_eq!(broker.describe_relation("Author", "books"), RelationKind::OneToMany);
        assert_eq!(broker.describe_relation("Book", "title"), RelationKind::NotARelation);
        assert_eq!(broker.describe_relation("Unknown", "field"), RelationKind::NotARelation);
    }
}
