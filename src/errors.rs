//! Error types for the StoreLens crate
//!
//! This module contains the registry errors. Errors raised while opening
//! or operating a translating store are [`object_store::StoreError`]s.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreLensError {
    #[error("Store not found in registry: {0}")]
    StoreNotFound(String),

    #[error("Store already registered: {0}")]
    StoreAlreadyRegistered(String),

    #[error("Translator not found in registry: {0}")]
    TranslatorNotFound(String),

    #[error("Translator already registered: {0}")]
    TranslatorAlreadyRegistered(String),
}
