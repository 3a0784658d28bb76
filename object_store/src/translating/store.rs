//! Store contract implementation for the translating store
//!
//! This module implements the generic data-access contract on top of the
//! translation and identity machinery in [`super::core`].

use super::core::TranslatingStore;
use crate::ObjectId;
use crate::errors::StoreError;
use crate::model::Model;
use crate::object::DomainObject;
use crate::query::Query;
use crate::results::{Cell, ResultsInfo, ResultsRow};
use crate::traits::ObjectStore;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
impl ObjectStore for TranslatingStore {
    async fn execute(
        &self,
        query: &Query,
        start: usize,
        limit: usize,
        optimise: bool,
        explain: bool,
        sequence: u32,
    ) -> Result<Vec<ResultsRow>, StoreError> {
        let translated = self.translate(query)?;

        // Pagination, hints, and sequencing go through unchanged; this
        // layer only rewrites the query shape
        let raw = self
            .underlying
            .execute(&translated, start, limit, optimise, explain, sequence)
            .await?;

        tracing::debug!(
            from = query.from_class(),
            rows = raw.len(),
            start,
            limit,
            "translating result rows"
        );

        let mut results = Vec::with_capacity(raw.len());
        for row in raw {
            let mut cells = Vec::with_capacity(row.len());
            for cell in row {
                match cell {
                    Cell::Object(object) => {
                        let logical = Arc::new(self.translator.translate_from_db_object(&object)?);
                        // Unconditional insert: the latest translation is canonical
                        self.identity.insert(logical.id, Arc::clone(&logical));
                        cells.push(Cell::Object(logical));
                    }
                    passthrough @ Cell::Value(_) => cells.push(passthrough),
                }
            }
            results.push(ResultsRow::new(cells));
        }

        Ok(results)
    }

    async fn estimate(&self, query: &Query) -> Result<ResultsInfo, StoreError> {
        let translated = self.translate(query)?;
        self.underlying.estimate(&translated).await
    }

    async fn count(&self, query: &Query, sequence: u32) -> Result<usize, StoreError> {
        let translated = self.translate(query)?;
        self.underlying.count(&translated, sequence).await
    }

    async fn get_object_by_id(
        &self,
        id: ObjectId,
    ) -> Result<Option<Arc<DomainObject>>, StoreError> {
        if let Some(object) = self.identity.get(&id) {
            return Ok(Some(object));
        }
        self.resolve_by_id(id).await
    }

    async fn get_object_by_example(
        &self,
        _example: &DomainObject,
        _field_names: &[String],
    ) -> Result<Option<Arc<DomainObject>>, StoreError> {
        Err(StoreError::unsupported("get_object_by_example", &self.name))
    }

    fn is_multi_connection(&self) -> bool {
        self.underlying.is_multi_connection()
    }

    fn sequence(&self) -> u32 {
        self.underlying.sequence()
    }

    fn model(&self) -> Arc<Model> {
        Arc::clone(&self.model)
    }
}
