//! In-memory object store
//!
//! A small, fully in-memory store used as the underlying delegate in unit
//! and integration tests. Execution ignores query content and returns a
//! window over preloaded rows, which keeps delegation observable: tests
//! can assert exactly which calls reached the store and what came back.

use crate::ObjectId;
use crate::errors::StoreError;
use crate::model::Model;
use crate::object::DomainObject;
use crate::query::Query;
use crate::results::{Cell, ResultsInfo, ResultsRow};
use crate::traits::ObjectStore;
use async_trait::async_trait;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Preloaded in-memory store
pub struct MemoryStore {
    model: Arc<Model>,
    rows: Mutex<Vec<ResultsRow>>,
    queries: Mutex<Vec<Query>>,
    sequence: AtomicU32,
    executions: AtomicU64,
    example_lookups: AtomicU64,
    failure: Mutex<Option<String>>,
    multi_connection: bool,
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("model", &self.model.name())
            .field("sequence", &self.sequence())
            .field("executions", &self.executions())
            .finish()
    }
}

impl MemoryStore {
    /// Create an empty store over a model
    pub fn new(model: Model) -> Self {
        Self {
            model: Arc::new(model),
            rows: Mutex::new(Vec::new()),
            queries: Mutex::new(Vec::new()),
            sequence: AtomicU32::new(0),
            executions: AtomicU64::new(0),
            example_lookups: AtomicU64::new(0),
            failure: Mutex::new(None),
            multi_connection: false,
        }
    }

    /// Builder-style multi-connection flag
    pub fn with_multi_connection(mut self, multi_connection: bool) -> Self {
        self.multi_connection = multi_connection;
        self
    }

    /// Replace all preloaded rows
    pub fn load_rows(&self, rows: Vec<ResultsRow>) {
        if let Ok(mut current) = self.rows.lock() {
            *current = rows;
        }
    }

    /// Append one preloaded row
    pub fn push_row(&self, row: ResultsRow) {
        if let Ok(mut current) = self.rows.lock() {
            current.push(row);
        }
    }

    /// Advance the store sequence, simulating a data change
    pub fn bump_sequence(&self) {
        self.sequence.fetch_add(1, Ordering::SeqCst);
    }

    /// Make every subsequent operation fail with a database error
    pub fn fail_with(&self, message: &str) {
        if let Ok(mut failure) = self.failure.lock() {
            *failure = Some(message.to_string());
        }
    }

    /// Stop failing operations
    pub fn clear_failure(&self) {
        if let Ok(mut failure) = self.failure.lock() {
            *failure = None;
        }
    }

    /// Number of `execute` calls that reached this store
    pub fn executions(&self) -> u64 {
        self.executions.load(Ordering::SeqCst)
    }

    /// Queries passed to `execute`, in call order
    pub fn executed_queries(&self) -> Vec<Query> {
        self.queries
            .lock()
            .map(|queries| queries.clone())
            .unwrap_or_default()
    }

    /// Number of `get_object_by_example` calls that reached this store
    pub fn example_lookups(&self) -> u64 {
        self.example_lookups.load(Ordering::SeqCst)
    }

    fn check_sequence(&self, sequence: u32) -> Result<(), StoreError> {
        let actual = self.sequence.load(Ordering::SeqCst);
        if sequence != actual {
            return Err(StoreError::DataChanged {
                expected: sequence,
                actual,
            });
        }
        Ok(())
    }

    fn check_failure(&self) -> Result<(), StoreError> {
        let failure = self
            .failure
            .lock()
            .map_err(|_| StoreError::Database("memory store lock poisoned".to_string()))?;
        match failure.as_ref() {
            Some(message) => Err(StoreError::Database(message.clone())),
            None => Ok(()),
        }
    }

    fn snapshot_rows(&self) -> Result<Vec<ResultsRow>, StoreError> {
        let rows = self
            .rows
            .lock()
            .map_err(|_| StoreError::Database("memory store lock poisoned".to_string()))?;
        Ok(rows.clone())
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn execute(
        &self,
        query: &Query,
        start: usize,
        limit: usize,
        _optimise: bool,
        _explain: bool,
        sequence: u32,
    ) -> Result<Vec<ResultsRow>, StoreError> {
        self.executions.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut queries) = self.queries.lock() {
            queries.push(query.clone());
        }
        self.check_sequence(sequence)?;
        self.check_failure()?;

        let rows = self.snapshot_rows()?;
        let end = (start + limit).min(rows.len());
        if start >= end {
            return Ok(Vec::new());
        }
        Ok(rows[start..end].to_vec())
    }

    async fn estimate(&self, _query: &Query) -> Result<ResultsInfo, StoreError> {
        self.check_failure()?;
        let rows = self.snapshot_rows()?;
        let len = rows.len();
        Ok(ResultsInfo::new(len, len, len, 0))
    }

    async fn count(&self, _query: &Query, sequence: u32) -> Result<usize, StoreError> {
        self.check_sequence(sequence)?;
        self.check_failure()?;
        Ok(self.snapshot_rows()?.len())
    }

    async fn get_object_by_id(
        &self,
        id: ObjectId,
    ) -> Result<Option<Arc<DomainObject>>, StoreError> {
        self.check_failure()?;
        let rows = self.snapshot_rows()?;
        for row in &rows {
            for cell in row {
                if let Cell::Object(object) = cell {
                    if object.id == id {
                        return Ok(Some(Arc::clone(object)));
                    }
                }
            }
        }
        Ok(None)
    }

    async fn get_object_by_example(
        &self,
        example: &DomainObject,
        field_names: &[String],
    ) -> Result<Option<Arc<DomainObject>>, StoreError> {
        self.example_lookups.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;

        // An empty field list matches the first object of the example's class
        let rows = self.snapshot_rows()?;
        for row in &rows {
            for cell in row {
                if let Cell::Object(object) = cell {
                    let class_matches = object.class_name == example.class_name;
                    let fields_match = field_names
                        .iter()
                        .all(|name| object.field(name) == example.field(name));
                    if class_matches && fields_match {
                        return Ok(Some(Arc::clone(object)));
                    }
                }
            }
        }
        Ok(None)
    }

    fn is_multi_connection(&self) -> bool {
        self.multi_connection
    }

    fn sequence(&self) -> u32 {
        self.sequence.load(Ordering::SeqCst)
    }

    fn model(&self) -> Arc<Model> {
        Arc::clone(&self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    fn store_model() -> Model {
        Model::new("physical", "physical.Entity", &["physical.Book"])
    }

    fn object_row(id: ObjectId, title: &str) -> ResultsRow {
        let object = DomainObject::new(id, "physical.Book").with_field("title", title);
        ResultsRow::new(vec![Cell::Object(Arc::new(object)), Cell::Value(Value::Int(id))])
    }

    #[tokio::test]
    async fn test_execute_returns_the_requested_window() {
        let store = MemoryStore::new(store_model());
        store.load_rows(vec![object_row(1, "a"), object_row(2, "b"), object_row(3, "c")]);
        let query = Query::new("physical.Book");

        let window = store.execute(&query, 1, 1, true, false, 0).await.unwrap();
        assert_eq!(window.len(), 1);
        assert_eq!(window[0].get(0).unwrap().object().unwrap().id, 2);

        let all = store.execute(&query, 0, 10, true, false, 0).await.unwrap();
        assert_eq!(all.len(), 3);

        let past_end = store.execute(&query, 5, 10, true, false, 0).await.unwrap();
        assert!(past_end.is_empty());

        assert_eq!(store.executions(), 3);
        assert_eq!(store.executed_queries(), vec![query.clone(), query.clone(), query]);
    }

    #[tokio::test]
    async fn test_stale_sequence_is_rejected() {
        let store = MemoryStore::new(store_model());
        store.load_rows(vec![object_row(1, "a")]);
        let query = Query::new("physical.Book");

        store.bump_sequence();

        let result = store.execute(&query, 0, 10, true, false, 0).await;
        assert!(matches!(
            result,
            Err(StoreError::DataChanged {
                expected: 0,
                actual: 1
            })
        ));

        let result = store.count(&query, 0).await;
        assert!(matches!(result, Err(StoreError::DataChanged { .. })));

        assert_eq!(store.count(&query, 1).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_injected_failure_surfaces_as_database_error() {
        let store = MemoryStore::new(store_model());
        store.load_rows(vec![object_row(1, "a")]);
        let query = Query::new("physical.Book");

        store.fail_with("connection refused");
        let result = store.execute(&query, 0, 10, true, false, 0).await;
        match result {
            Err(StoreError::Database(message)) => assert_eq!(message, "connection refused"),
            other => panic!("expected a database error, got {:?}", other),
        }

        store.clear_failure();
        assert!(store.execute(&query, 0, 10, true, false, 0).await.is_ok());
    }

    #[tokio::test]
    async fn test_get_object_by_id_scans_preloaded_rows() {
        let store = MemoryStore::new(store_model());
        store.load_rows(vec![object_row(1, "a"), object_row(2, "b")]);

        let found = store.get_object_by_id(2).await.unwrap().unwrap();
        assert_eq!(found.id, 2);
        assert!(store.get_object_by_id(9).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_object_by_example_matches_on_named_fields() {
        let store = MemoryStore::new(store_model());
        store.load_rows(vec![object_row(1, "a"), object_row(2, "b")]);

        let example = DomainObject::new(0, "physical.Book").with_field("title", "b");
        let fields = vec!["title".to_string()];

        let found = store.get_object_by_example(&example, &fields).await.unwrap().unwrap();
        assert_eq!(found.id, 2);
        assert_eq!(store.example_lookups(), 1);

        let example = DomainObject::new(0, "physical.Book").with_field("title", "zzz");
        assert!(store.get_object_by_example(&example, &fields).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_estimate_reports_the_full_row_count() {
        let store = MemoryStore::new(store_model());
        store.load_rows(vec![object_row(1, "a"), object_row(2, "b")]);

        let info = store.estimate(&Query::new("physical.Book")).await.unwrap();
        assert_eq!(info, ResultsInfo::new(2, 2, 2, 0));
    }

    #[test]
    fn test_capability_flags() {
        let store = MemoryStore::new(store_model()).with_multi_connection(true);
        assert!(store.is_multi_connection());
        assert_eq!(store.sequence(), 0);
        assert_eq!(store.model().name(), "physical");
    }
}
