use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use log::info;
use serde::Serialize;

/// Snapshot of one in-flight request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InflightEntry {
    pub uri: String,
    pub age_ms: u64,
}

/// Observes requests currently being serviced.
///
/// Injected into the middleware stack instead of patching a process-global
/// transport, so it stays testable. The binary wires `report_once` to
/// SIGUSR1 for an on-demand dump.
#[derive(Default)]
pub struct InflightTracker {
    inflight: Mutex<HashMap<String, Instant>>,
}

impl InflightTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, uri: &str) {
        self.lock().insert(uri.to_string(), Instant::now());
    }

    pub fn unregister(&self, uri: &str) {
        self.lock().remove(uri);
    }

    pub fn snapshot(&self) -> Vec<InflightEntry> {
        let mut entries: Vec<InflightEntry> = self
            .lock()
            .iter()
            .map(|(uri, started)| InflightEntry {
                uri: uri.clone(),
                age_ms: started.elapsed().as_millis() as u64,
            })
            .collect();
        entries.sort_by(|a, b| a.uri.cmp(&b.uri));
        entries
    }

    pub fn report_once(&self) {
        let entries = self.snapshot();
        info!("In-flight HTTP requests: {}", entries.len());
        for entry in &entries {
            info!("  servicing {:?} for {}ms", entry.uri, entry.age_ms);
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Instant>> {
        self.inflight.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
