use thiserror::Error;

/// Data-access errors shared by every store implementation
///
/// A translating store and its delegate report errors through the same
/// type, so delegate failures travel through the decorating layer
/// unchanged. The decorator only introduces errors of its own kinds:
/// configuration, translation, and capability gaps.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Missing or invalid setup options, an unresolvable store name, or a
    /// translator that cannot be constructed. Fatal to construction and
    /// never retried.
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failure mapping a physical-model object back to the logical model
    #[error("Translation error: {message}")]
    Translation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Explicit capability gap, declared rather than silently degraded
    #[error("Operation '{operation}' is not supported by store '{store}'")]
    UnsupportedOperation { operation: String, store: String },

    /// Execution failure reported by the underlying store
    #[error("Database error: {0}")]
    Database(String),

    /// The caller's sequence number no longer matches the store's
    #[error("Data changed: expected sequence {expected}, store is at {actual}")]
    DataChanged { expected: u32, actual: u32 },
}

impl StoreError {
    /// Configuration failure with no underlying cause
    pub fn configuration(message: &str) -> Self {
        Self::Configuration {
            message: message.to_string(),
            source: None,
        }
    }

    /// Configuration failure caused by another error
    pub fn configuration_with<E>(message: &str, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Configuration {
            message: message.to_string(),
            source: Some(Box::new(source)),
        }
    }

    /// Translation failure with no underlying cause
    pub fn translation(message: &str) -> Self {
        Self::Translation {
            message: message.to_string(),
            source: None,
        }
    }

    /// Translation failure caused by another error
    pub fn translation_with<E>(message: &str, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Translation {
            message: message.to_string(),
            source: Some(Box::new(source)),
        }
    }

    /// Capability gap for a named operation on a named store
    pub fn unsupported(operation: &str, store: &str) -> Self {
        Self::UnsupportedOperation {
            operation: operation.to_string(),
            store: store.to_string(),
        }
    }
}
