//! Convenience re-exports for common telemetry usage

// Core telemetry components
pub use crate::event::LookupSample;
pub use crate::manager::TelemetryManager;
pub use crate::types::SampleCallback;

// Re-export centralized config
pub use config::TelemetryConfig;

// Common external dependencies
pub use serde::{Deserialize, Serialize};
