//! Type definitions for the telemetry system

use crate::event::LookupSample;

/// Callback invoked with each emitted sample
pub type SampleCallback = Box<dyn Fn(&LookupSample) + Send + Sync>;
