//! Lookup telemetry for the translating store
//!
//! Object-by-id lookups are the hottest path through a translating store,
//! so they are counted rather than logged individually. Every N lookups
//! the manager emits one [`LookupSample`] to its subscribers and writes a
//! single log line, giving a cheap long-running health signal.

pub mod event;
pub mod manager;
pub mod prelude;
pub mod types;

// Re-export centralized config
pub use config::TelemetryConfig;

pub use event::LookupSample;
pub use manager::TelemetryManager;
pub use types::SampleCallback;
