//! Translation strategy contract

use crate::errors::StoreError;
use crate::object::DomainObject;
use crate::query::Query;
use crate::traits::core::ObjectStore;
use std::sync::Weak;

/// Pluggable strategy converting between the logical and physical models
///
/// Translation is pure: equal inputs produce equal outputs and no call has
/// side effects, so duplicate work from concurrent cache misses is safe.
///
/// Construction is two-phase: a translator is built against a model and an
/// underlying store, then told which translating store owns it via
/// [`Translator::bind_store`]. The binding is weak because the store owns
/// the translator, not the other way round.
pub trait Translator: Send + Sync {
    /// Rewrite a logical query into the physical model
    fn translate_query(&self, query: &Query) -> Result<Query, StoreError>;

    /// Rewrite a physical object back into the logical model
    ///
    /// Fails with [`StoreError::Translation`] when the object's class has
    /// no logical counterpart.
    fn translate_from_db_object(&self, object: &DomainObject) -> Result<DomainObject, StoreError>;

    /// Record which translating store this translator serves
    fn bind_store(&self, store: Weak<dyn ObjectStore>);
}
