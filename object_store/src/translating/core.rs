use crate::ObjectId;
use crate::errors::StoreError;
use crate::model::Model;
use crate::object::DomainObject;
use crate::query::Query;
use crate::results::Cell;
use crate::traits::{ObjectStore, Translator};
use cache_system::{CacheConfig, CacheStats, IdentityCache, TranslationCache};
use std::sync::Arc;
use telemetry::TelemetryManager;

/// Store decorator that translates queries in and objects out
///
/// A translating store exposes one model (the logical model) while its
/// delegate speaks another (the physical model). Every operation rewrites
/// the incoming query through the [`Translator`], delegates unchanged
/// pagination and sequencing to the underlying store, and rewrites any
/// domain objects in the result back into the logical model. Translated
/// queries are memoized in a bounded LRU cache; translated objects are
/// recorded in an identity cache so that the same id keeps resolving to
/// the same shared instance.
pub struct TranslatingStore {
    pub(crate) model: Arc<Model>,
    pub(crate) underlying: Arc<dyn ObjectStore>,
    pub(crate) translator: Arc<dyn Translator>,
    pub(crate) query_cache: TranslationCache<Query, Arc<Query>>,
    pub(crate) identity: IdentityCache<ObjectId, Arc<DomainObject>>,
    pub(crate) telemetry: Arc<TelemetryManager>,
    pub(crate) name: String,
}

impl std::fmt::Debug for TranslatingStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslatingStore")
            .field("name", &self.name)
            .field("model", &self.model.name())
            .field("underlying_model", &self.underlying.model().name())
            .field("cached_translations", &self.query_cache.len())
            .field("cached_objects", &self.identity.len())
            .finish()
    }
}

impl TranslatingStore {
    /// Build a translating store over an underlying store and a translator
    ///
    /// Construction is two-phase: the store is assembled first, then the
    /// translator is bound to it, so the translator never sees a partially
    /// initialized store. The binding is weak; dropping the store releases
    /// the translator's back-reference with it.
    pub fn new(
        model: Arc<Model>,
        underlying: Arc<dyn ObjectStore>,
        translator: Arc<dyn Translator>,
        cache_config: &CacheConfig,
        telemetry: Arc<TelemetryManager>,
    ) -> Arc<Self> {
        let name = format!("translating.{}", model.name());
        let store = Arc::new(Self {
            model,
            underlying,
            translator,
            query_cache: TranslationCache::from_config(cache_config),
            identity: IdentityCache::new(),
            telemetry,
            name,
        });

        let bound: Arc<dyn ObjectStore> = Arc::clone(&store) as Arc<dyn ObjectStore>;
        store.translator.bind_store(Arc::downgrade(&bound));
        store
    }

    /// Translate a logical query, reusing a cached translation when one exists
    ///
    /// The cache lock is never held across the translator call, so two
    /// concurrent misses for equal queries may both translate; the later
    /// insert wins. Translation is pure, so the duplicate work is harmless.
    pub(crate) fn translate(&self, query: &Query) -> Result<Arc<Query>, StoreError> {
        if let Some(translated) = self.query_cache.get(query) {
            return Ok(translated);
        }

        tracing::debug!(from = query.from_class(), "translating query");
        let translated = Arc::new(self.translator.translate_query(query)?);
        self.query_cache.insert(query.clone(), Arc::clone(&translated));
        Ok(translated)
    }

    /// Resolve one object by id through the store's own execute path
    ///
    /// This is the fallback behind [`ObjectStore::get_object_by_id`] when
    /// the identity cache has no entry. It runs the canonical id query
    /// through [`ObjectStore::execute`], which translates the result row
    /// and records the object in the identity cache as a side effect, then
    /// reports the lookup to telemetry.
    pub async fn resolve_by_id(
        &self,
        id: ObjectId,
    ) -> Result<Option<Arc<DomainObject>>, StoreError> {
        let query = Query::for_object_id(self.model.base_class(), id);
        // Limit 2: enough to notice a duplicate id without fetching more
        let rows = self
            .execute(&query, 0, 2, true, false, self.sequence())
            .await?;

        if rows.len() > 1 {
            return Err(StoreError::Database(format!(
                "multiple objects in the database with id {}",
                id
            )));
        }
        let object = match rows.first().and_then(|row| row.get(0)) {
            Some(Cell::Object(object)) => Some(Arc::clone(object)),
            Some(Cell::Value(_)) => {
                return Err(StoreError::Database(format!(
                    "id lookup for {} returned a non-object cell",
                    id
                )));
            }
            None => None,
        };

        self.telemetry.record_lookup(&self.name);
        Ok(object)
    }

    /// Diagnostic name of this store
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The store this one delegates to
    pub fn underlying(&self) -> &Arc<dyn ObjectStore> {
        &self.underlying
    }

    /// The identity cache mapping logical ids to their shared instances
    pub fn identity_cache(&self) -> &IdentityCache<ObjectId, Arc<DomainObject>> {
        &self.identity
    }

    /// Hit/miss counters for the query translation cache
    pub fn query_cache_stats(&self) -> &CacheStats {
        self.query_cache.stats()
    }

    /// The telemetry collaborator lookups are reported to
    pub fn telemetry(&self) -> &TelemetryManager {
        &self.telemetry
    }
}
