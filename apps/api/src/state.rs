use std::sync::Arc;

use crate::completion::CompletionBackend;
use crate::config::Config;
use crate::incident_log::IncidentLog;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The in-process incident log. Constructed once in main; there is no
    /// global fallback.
    pub log: IncidentLog,
    /// Pluggable completion backend. Production wires Bedrock; tests wire
    /// a scripted stand-in.
    pub backend: Arc<dyn CompletionBackend>,
    pub config: Config,
}

#[cfg(test)]
impl AppState {
    /// State wired with the given backend, an empty log, and test config.
    pub(crate) fn for_tests(backend: Arc<dyn CompletionBackend>) -> Self {
        AppState {
            log: IncidentLog::new(),
            backend,
            config: Config::for_tests(),
        }
    }
}
