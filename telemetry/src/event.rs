//! Telemetry sample types
//!
//! This module defines the structure of the samples that flow from the
//! translating store to telemetry subscribers.

use serde::{Deserialize, Serialize};

/// Periodic sample of object-by-id lookup volume
///
/// One sample is emitted each time the lookup counter crosses a multiple
/// of the configured sampling interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupSample {
    /// Name of the store the lookups went through
    pub store: String,
    /// Total lookups recorded by that store so far
    pub lookups: u64,
    /// Sample timestamp (UTC)
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl LookupSample {
    pub fn new(store: &str, lookups: u64) -> Self {
        Self {
            store: store.to_string(),
            lookups,
            timestamp: chrono::Utc::now(),
        }
    }
}
