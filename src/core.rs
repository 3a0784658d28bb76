//! Core StoreLens functionality
//!
//! This module contains the main StoreLens registry and its implementation,
//! resolving named stores and translator factories into translating stores.

use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::StoreLensError;
use config::AppConfig;
use object_store::traits::{ObjectStore, Translator};
use object_store::{Model, NamespaceTranslator, StoreError, TranslatingStore};
use telemetry::TelemetryManager;

/// Constructor for a translator, bound to a logical model and the store
/// the translator will rewrite queries for
pub type TranslatorFactory = Arc<
    dyn Fn(Arc<Model>, Arc<dyn ObjectStore>) -> Result<Arc<dyn Translator>, StoreError>
        + Send
        + Sync,
>;

/// Registry resolving store and translator names from configuration
///
/// A translating store is configured by name: the `os` option picks the
/// underlying store out of this registry, and the `translator_class`
/// option picks the factory that builds the translator over it. Every
/// resolution failure is reported as a configuration error carrying the
/// registry error as its cause.
pub struct StoreLens {
    stores: HashMap<String, Arc<dyn ObjectStore>>,
    translators: HashMap<String, TranslatorFactory>,
}

impl StoreLens {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            stores: HashMap::new(),
            translators: HashMap::new(),
        }
    }

    /// Register an object store under a given name
    pub fn register_store(
        &mut self,
        name: String,
        store: Arc<dyn ObjectStore>,
    ) -> Result<(), StoreLensError> {
        if self.stores.contains_key(&name) {
            return Err(StoreLensError::StoreAlreadyRegistered(name));
        }

        self.stores.insert(name, store);
        Ok(())
    }

    /// Get a registered store by name
    pub fn store(&self, name: &str) -> Result<Arc<dyn ObjectStore>, StoreLensError> {
        self.stores
            .get(name)
            .map(Arc::clone)
            .ok_or_else(|| StoreLensError::StoreNotFound(name.to_string()))
    }

    /// Register a translator factory under a given name
    pub fn register_translator(
        &mut self,
        name: String,
        factory: TranslatorFactory,
    ) -> Result<(), StoreLensError> {
        if self.translators.contains_key(&name) {
            return Err(StoreLensError::TranslatorAlreadyRegistered(name));
        }

        self.translators.insert(name, factory);
        Ok(())
    }

    /// Get a registered translator factory by name
    pub fn translator_factory(&self, name: &str) -> Result<TranslatorFactory, StoreLensError> {
        self.translators
            .get(name)
            .map(Arc::clone)
            .ok_or_else(|| StoreLensError::TranslatorNotFound(name.to_string()))
    }

    /// List all registered store names
    pub fn list_stores(&self) -> Vec<&String> {
        self.stores.keys().collect()
    }

    /// List all registered translator names
    pub fn list_translators(&self) -> Vec<&String> {
        self.translators.keys().collect()
    }

    /// Remove a store by name
    pub fn unregister_store(&mut self, name: &str) -> Result<(), StoreLensError> {
        self.stores
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| StoreLensError::StoreNotFound(name.to_string()))
    }

    /// Open a translating store over a logical model from configuration
    ///
    /// Resolves the `os` and `translator_class` options, constructs the
    /// translator over the underlying store, and wires up a translating
    /// store with its caches and telemetry. All failures are fatal
    /// configuration errors; nothing is opened partially.
    pub fn open_translating_store(
        &self,
        model: Arc<Model>,
        config: &AppConfig,
    ) -> Result<Arc<TranslatingStore>, StoreError> {
        let os_name = config.store.os.as_deref().ok_or_else(|| {
            StoreError::configuration(
                "no 'os' option specified for the translating store (check the [store] section)",
            )
        })?;
        let translator_name = config.store.translator_class.as_deref().ok_or_else(|| {
            StoreError::configuration(
                "no 'translator_class' option specified for the translating store (check the [store] section)",
            )
        })?;

        let underlying = self.store(os_name).map_err(|error| {
            StoreError::configuration_with(
                &format!("cannot resolve underlying store '{}'", os_name),
                error,
            )
        })?;
        let factory = self.translator_factory(translator_name).map_err(|error| {
            StoreError::configuration_with(
                &format!("cannot resolve translator '{}'", translator_name),
                error,
            )
        })?;

        let translator =
            factory(Arc::clone(&model), Arc::clone(&underlying)).map_err(|error| {
                StoreError::configuration_with(
                    &format!("cannot construct translator '{}'", translator_name),
                    error,
                )
            })?;

        let telemetry = Arc::new(TelemetryManager::from_config(&config.telemetry));
        Ok(TranslatingStore::new(
            model,
            underlying,
            translator,
            &config.cache,
            telemetry,
        ))
    }
}

impl Default for StoreLens {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry preloaded with the built-in translator factories
///
/// Currently that is just `"namespace"`, which prefixes class names with
/// the underlying model's namespace.
pub fn default_registry() -> StoreLens {
    let mut registry = StoreLens::new();
    let namespace: TranslatorFactory = Arc::new(|model, store| {
        let translator = NamespaceTranslator::new(model, store)?;
        Ok(Arc::new(translator) as Arc<dyn Translator>)
    });
    // Built-in names cannot collide in a fresh registry
    registry.translators.insert("namespace".to_string(), namespace);
    registry
}
