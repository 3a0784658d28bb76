//! Namespace translation strategy
//!
//! The simplest useful translator: the physical model carries the same
//! classes as the logical one, prefixed with the physical model's name.
//! Logical `Book` maps to physical `warehouse.Book` when the underlying
//! store's model is named `warehouse`, and back again.

use crate::errors::StoreError;
use crate::model::Model;
use crate::object::DomainObject;
use crate::query::Query;
use crate::traits::{ObjectStore, Translator};
use std::sync::{Arc, RwLock, Weak};

/// Translator mapping class names across a model namespace
pub struct NamespaceTranslator {
    model: Arc<Model>,
    namespace: String,
    store: RwLock<Option<Weak<dyn ObjectStore>>>,
}

impl std::fmt::Debug for NamespaceTranslator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NamespaceTranslator")
            .field("model", &self.model.name())
            .field("namespace", &self.namespace)
            .field("bound", &self.bound_store().is_some())
            .finish()
    }
}

impl NamespaceTranslator {
    /// Build a translator between a logical model and an underlying store
    ///
    /// The namespace is the underlying store's model name. Construction
    /// fails when any logical class has no namespaced counterpart in the
    /// physical model, so a misconfigured pairing is caught before the
    /// first query runs.
    pub fn new(model: Arc<Model>, underlying: Arc<dyn ObjectStore>) -> Result<Self, StoreError> {
        let physical = underlying.model();
        let namespace = physical.name().to_string();

        for class in model.classes() {
            let physical_class = format!("{}.{}", namespace, class);
            if !physical.has_class(&physical_class) {
                return Err(StoreError::configuration(&format!(
                    "model '{}' has no class '{}' backing logical class '{}'",
                    physical.name(),
                    physical_class,
                    class
                )));
            }
        }

        Ok(Self {
            model,
            namespace,
            store: RwLock::new(None),
        })
    }

    /// Namespace prefixed onto logical class names
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The translating store this translator is bound to, if still alive
    pub fn bound_store(&self) -> Option<Arc<dyn ObjectStore>> {
        self.store
            .read()
            .ok()
            .and_then(|guard| guard.as_ref().and_then(Weak::upgrade))
    }

    fn strip_namespace<'a>(&self, class_name: &'a str) -> Option<&'a str> {
        class_name
            .strip_prefix(&self.namespace)
            .and_then(|rest| rest.strip_prefix('.'))
    }
}

impl Translator for NamespaceTranslator {
    fn translate_query(&self, query: &Query) -> Result<Query, StoreError> {
        let class = query.from_class();
        if !self.model.has_class(class) {
            return Err(StoreError::translation(&format!(
                "class '{}' is not in model '{}'",
                class,
                self.model.name()
            )));
        }
        Ok(query.with_from(&format!("{}.{}", self.namespace, class)))
    }

    fn translate_from_db_object(&self, object: &DomainObject) -> Result<DomainObject, StoreError> {
        let class = self.strip_namespace(&object.class_name).ok_or_else(|| {
            StoreError::translation(&format!(
                "object {} has class '{}' outside namespace '{}'",
                object.id, object.class_name, self.namespace
            ))
        })?;

        if !self.model.has_class(class) {
            return Err(StoreError::translation(&format!(
                "class '{}' translates to '{}', which is not in model '{}'",
                object.class_name,
                class,
                self.model.name()
            )));
        }

        Ok(object.with_class_name(class))
    }

    fn bind_store(&self, store: Weak<dyn ObjectStore>) {
        if let Ok(mut guard) = self.store.write() {
            *guard = Some(store);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::query::{QueryFilter, QueryValue};

    fn logical_model() -> Arc<Model> {
        Arc::new(Model::new("library", "Entity", &["Book", "Author"]))
    }

    fn warehouse_store() -> Arc<MemoryStore> {
        Arc::new(MemoryStore::new(Model::new(
            "warehouse",
            "warehouse.Entity",
            &["warehouse.Book", "warehouse.Author"],
        )))
    }

    fn translator() -> NamespaceTranslator {
        NamespaceTranslator::new(logical_model(), warehouse_store()).unwrap()
    }

    #[test]
    fn test_construction_takes_the_namespace_from_the_physical_model() {
        let translator = translator();
        assert_eq!(translator.namespace(), "warehouse");
        assert!(translator.bound_store().is_none());
    }

    #[test]
    fn test_construction_rejects_an_unbacked_logical_class() {
        let model = Arc::new(Model::new("library", "Entity", &["Book", "Magazine"]));

        let result = NamespaceTranslator::new(model, warehouse_store());

        match result {
            Err(StoreError::Configuration { message, .. }) => {
                assert!(message.contains("warehouse.Magazine"), "got: {}", message);
            }
            other => panic!("expected a configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_translate_query_rewrites_only_the_root_class() {
        let query = Query::new("Book")
            .select("title")
            .filter(QueryFilter::eq("title", QueryValue::from("Orlando")));

        let translated = translator().translate_query(&query).unwrap();

        assert_eq!(translated.from_class(), "warehouse.Book");
        assert_eq!(translated.selected(), query.selected());
        assert_eq!(translated.conditions(), query.conditions());
    }

    #[test]
    fn test_translate_query_rejects_an_unknown_class() {
        let result = translator().translate_query(&Query::new("Magazine"));
        assert!(matches!(result, Err(StoreError::Translation { .. })));
    }

    #[test]
    fn test_translate_from_db_object_strips_the_namespace() {
        let physical = DomainObject::new(10, "warehouse.Book").with_field("title", "Orlando");

        let logical = translator().translate_from_db_object(&physical).unwrap();

        assert_eq!(logical.id, 10);
        assert_eq!(logical.class_name, "Book");
        assert_eq!(logical.fields, physical.fields);
    }

    #[test]
    fn test_translate_from_db_object_rejects_a_foreign_namespace() {
        let physical = DomainObject::new(10, "attic.Book");
        let result = translator().translate_from_db_object(&physical);
        assert!(matches!(result, Err(StoreError::Translation { .. })));
    }

    #[test]
    fn test_translate_from_db_object_rejects_an_unknown_logical_class() {
        let physical = DomainObject::new(10, "warehouse.Magazine");
        let result = translator().translate_from_db_object(&physical);
        assert!(matches!(result, Err(StoreError::Translation { .. })));
    }

    #[test]
    fn test_bind_store_is_held_weakly() {
        let translator = translator();
        let store = warehouse_store();

        {
            let strong: Arc<dyn ObjectStore> = store;
            translator.bind_store(Arc::downgrade(&strong));
            assert!(translator.bound_store().is_some());
        }

        assert!(translator.bound_store().is_none());
    }
}
