use crate::event::LookupSample;
use crate::types::SampleCallback;
use config::TelemetryConfig;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

/// Telemetry manager for object lookup sampling
///
/// Counts every lookup and emits one sample per `sample_every` lookups,
/// both to registered callbacks and to the log at info level. Counting is
/// a single atomic increment, so recording a lookup is safe to do on the
/// hot path.
pub struct TelemetryManager {
    callbacks: RwLock<Vec<SampleCallback>>,
    lookups: AtomicU64,
    sample_every: u64,
}

impl std::fmt::Debug for TelemetryManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelemetryManager")
            .field("lookups", &self.lookups())
            .field("sample_every", &self.sample_every)
            .field("callback_count", &self.callback_count())
            .finish()
    }
}

impl TelemetryManager {
    pub fn new(sample_every: u64) -> Self {
        Self {
            callbacks: RwLock::new(Vec::new()),
            lookups: AtomicU64::new(0),
            // Sampling every lookup is the closest meaningful interpretation
            // of an interval of zero
            sample_every: sample_every.max(1),
        }
    }

    /// Create a manager sampling at the configured interval
    pub fn from_config(config: &TelemetryConfig) -> Self {
        Self::new(config.sample_every)
    }

    /// Add sample callback
    pub fn add_callback<F>(&self, callback: F)
    where
        F: Fn(&LookupSample) + Send + Sync + 'static,
    {
        if let Ok(mut callbacks) = self.callbacks.write() {
            callbacks.push(Box::new(callback));
        }
    }

    /// Record one object-by-id lookup, returning the running total
    ///
    /// When the total crosses a multiple of the sampling interval, one
    /// sample is emitted to all subscribers.
    pub fn record_lookup(&self, store: &str) -> u64 {
        let count = self.lookups.fetch_add(1, Ordering::Relaxed) + 1;
        if count % self.sample_every == 0 {
            self.emit(LookupSample::new(store, count));
        }
        count
    }

    /// Emit a sample to all subscribers
    pub fn emit(&self, sample: LookupSample) {
        tracing::info!(
            store = %sample.store,
            lookups = sample.lookups,
            "resolved {} objects by id",
            sample.lookups
        );
        if let Ok(callbacks) = self.callbacks.read() {
            for callback in callbacks.iter() {
                callback(&sample);
            }
        }
    }

    /// Total lookups recorded so far
    pub fn lookups(&self) -> u64 {
        self.lookups.load(Ordering::Relaxed)
    }

    /// Sampling interval in lookups
    pub fn sample_every(&self) -> u64 {
        self.sample_every
    }

    /// Clear all callbacks
    pub fn clear_callbacks(&self) {
        if let Ok(mut callbacks) = self.callbacks.write() {
            callbacks.clear();
        }
    }

    /// Get number of registered callbacks
    pub fn callback_count(&self) -> usize {
        self.callbacks.read().map(|c| c.len()).unwrap_or(0)
    }
}

impl Default for TelemetryManager {
    fn default() -> Self {
        Self::from_config(&TelemetryConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn collecting_manager(sample_every: u64) -> (TelemetryManager, Arc<Mutex<Vec<LookupSample>>>) {
        let manager = TelemetryManager::new(sample_every);
        let samples = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&samples);
        manager.add_callback(move |sample| {
            sink.lock().unwrap().push(sample.clone());
        });
        (manager, samples)
    }

    #[test]
    fn test_sample_emitted_exactly_on_interval() {
        let (manager, samples) = collecting_manager(1000);

        for _ in 0..999 {
            manager.record_lookup("main");
        }
        assert!(samples.lock().unwrap().is_empty());

        manager.record_lookup("main");

        let collected = samples.lock().unwrap();
        assert_eq!(collected.len(), 1);
        assert_eq!(collected[0].store, "main");
        assert_eq!(collected[0].lookups, 1000);
    }

    #[test]
    fn test_every_interval_multiple_emits() {
        let (manager, samples) = collecting_manager(10);

        for _ in 0..35 {
            manager.record_lookup("main");
        }

        let collected = samples.lock().unwrap();
        let totals: Vec<u64> = collected.iter().map(|s| s.lookups).collect();
        assert_eq!(totals, vec![10, 20, 30]);
    }

    #[test]
    fn test_record_lookup_returns_running_total() {
        let manager = TelemetryManager::new(1000);

        assert_eq!(manager.record_lookup("main"), 1);
        assert_eq!(manager.record_lookup("main"), 2);
        assert_eq!(manager.lookups(), 2);
    }

    #[test]
    fn test_zero_interval_samples_every_lookup() {
        let (manager, samples) = collecting_manager(0);

        manager.record_lookup("main");
        manager.record_lookup("main");

        assert_eq!(samples.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_clear_callbacks() {
        let (manager, samples) = collecting_manager(1);

        manager.record_lookup("main");
        manager.clear_callbacks();
        manager.record_lookup("main");

        assert_eq!(samples.lock().unwrap().len(), 1);
        assert_eq!(manager.callback_count(), 0);
    }
}
