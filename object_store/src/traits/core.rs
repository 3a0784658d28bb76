//! Trait definitions
//!
//! This module defines the data-access contract every store satisfies.

use crate::ObjectId;
use crate::errors::StoreError;
use crate::model::Model;
use crate::object::DomainObject;
use crate::query::Query;
use crate::results::{ResultsInfo, ResultsRow};
use async_trait::async_trait;
use std::sync::Arc;

/// The generic data-access contract shared by plain and decorating stores
///
/// A translating store implements this trait over another implementation
/// of it, so it is substitutable anywhere a plain store is expected.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Execute a query, returning rows `start..start + limit`
    ///
    /// `optimise` and `explain` are hints forwarded to whatever engine
    /// runs the query. `sequence` is the caller's view of the store
    /// sequence; stores that track data changes fail with
    /// [`StoreError::DataChanged`] when it is stale.
    async fn execute(
        &self,
        query: &Query,
        start: usize,
        limit: usize,
        optimise: bool,
        explain: bool,
        sequence: u32,
    ) -> Result<Vec<ResultsRow>, StoreError>;

    /// Estimate how expensive a query would be to run in full
    async fn estimate(&self, query: &Query) -> Result<ResultsInfo, StoreError>;

    /// Count the rows a query would produce
    async fn count(&self, query: &Query, sequence: u32) -> Result<usize, StoreError>;

    /// Fetch one object by id, or `None` when no object has it
    async fn get_object_by_id(&self, id: ObjectId)
    -> Result<Option<Arc<DomainObject>>, StoreError>;

    /// Fetch one object matching the example on the named fields
    ///
    /// Not every store can answer this; those that cannot fail with
    /// [`StoreError::UnsupportedOperation`].
    async fn get_object_by_example(
        &self,
        example: &DomainObject,
        field_names: &[String],
    ) -> Result<Option<Arc<DomainObject>>, StoreError>;

    /// Whether this store hands out more than one underlying connection
    fn is_multi_connection(&self) -> bool;

    /// Current store sequence; changes whenever the stored data does
    fn sequence(&self) -> u32;

    /// The model this store's queries and objects belong to
    fn model(&self) -> Arc<Model>;
}
