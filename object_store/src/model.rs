//! Object model descriptors
//!
//! This module defines the immutable model descriptor shared by stores and
//! translators.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Immutable descriptor of an object model
///
/// A model is a named set of class names with one distinguished base class
/// that every persistent object extends. A translating store reports the
/// logical model its clients query against; its delegate reports the
/// physical one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    name: String,
    base_class: String,
    classes: BTreeSet<String>,
}

impl Model {
    /// Create a model from its class names
    ///
    /// The base class is always a member of the class set, whether or not
    /// the caller listed it.
    pub fn new(name: &str, base_class: &str, classes: &[&str]) -> Self {
        let mut set: BTreeSet<String> = classes.iter().map(|c| c.to_string()).collect();
        set.insert(base_class.to_string());
        Self {
            name: name.to_string(),
            base_class: base_class.to_string(),
            classes: set,
        }
    }

    /// Model name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The class every persistent object in this model extends
    pub fn base_class(&self) -> &str {
        &self.base_class
    }

    /// Whether a class belongs to this model
    pub fn has_class(&self, class_name: &str) -> bool {
        self.classes.contains(class_name)
    }

    /// All class names in this model
    pub fn classes(&self) -> &BTreeSet<String> {
        &self.classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_class_is_always_a_member() {
        let model = Model::new("library", "Entity", &["Book", "Author"]);

        assert!(model.has_class("Entity"));
        assert!(model.has_class("Book"));
        assert!(model.has_class("Author"));
        assert!(!model.has_class("Publisher"));
        assert_eq!(model.classes().len(), 3);
    }

    #[test]
    fn test_accessors() {
        let model = Model::new("library", "Entity", &["Book"]);

        assert_eq!(model.name(), "library");
        assert_eq!(model.base_class(), "Entity");
    }
}
