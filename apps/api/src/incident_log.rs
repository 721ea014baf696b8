// In-memory, append-only incident log.
//
// The only shared mutable state in the service. It is constructed in main
// and injected through `AppState` (no globals), and it dies with the
// process: durability is out of scope for this service.

use std::sync::{Arc, Mutex, PoisonError};

use crate::triage::models::IncidentRecord;

/// Append-only record log with snapshot reads.
///
/// Cloning the handle is cheap and every clone shares the same storage.
/// The mutex serializes appends, so readers never observe a half-written
/// record; record order is the order appends completed.
#[derive(Clone, Default)]
pub struct IncidentLog {
    records: Arc<Mutex<Vec<IncidentRecord>>>,
}

impl IncidentLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one processed record.
    pub fn append(&self, record: IncidentRecord) {
        // A poisoned lock still guards fully-written records; keep serving.
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
    }

    /// Returns a snapshot of every record, oldest first. Callers get
    /// clones; nothing handed out can mutate the live log.
    pub fn list_all(&self) -> Vec<IncidentRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
