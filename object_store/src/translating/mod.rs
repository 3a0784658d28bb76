//! Translating store decorator
//!
//! This module provides a store that sits in front of another store and
//! speaks a different model to its clients: queries are rewritten into the
//! underlying model before delegation, and objects coming back are rewritten
//! into the client model, with translated queries memoized and translated
//! objects recorded in an identity cache.

pub mod core;
pub mod namespace;
pub mod store;


pub use core::TranslatingStore;
pub use namespace::NamespaceTranslator;
