//! Domain objects
//!
//! This module defines the persistent object representation shared by the
//! logical and physical models.

use crate::ObjectId;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One persistent object, in either the logical or the physical model
///
/// Objects are identified by an integer id that survives translation: a
/// physical object and its logical counterpart carry the same id. The
/// identity cache guarantees that repeated translation of one id hands
/// out one shared instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainObject {
    pub id: ObjectId,
    pub class_name: String,
    pub fields: BTreeMap<String, Value>,
}

impl DomainObject {
    /// Create an object with no fields
    pub fn new(id: ObjectId, class_name: &str) -> Self {
        Self {
            id,
            class_name: class_name.to_string(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field assignment
    pub fn with_field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    /// Look up a field value
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// The same object carried under a different class name
    ///
    /// Translators use this to move an object between models; the id and
    /// fields are untouched.
    pub fn with_class_name(&self, class_name: &str) -> Self {
        let mut object = self.clone();
        object.class_name = class_name.to_string();
        object
    }
}
