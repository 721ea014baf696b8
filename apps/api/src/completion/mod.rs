// Completion backend boundary.
//
// Everything above this module sees one capability: send a prompt, get text
// back or an error, within a bounded time. Which provider answers and what
// JSON it speaks stays below this line (bedrock.rs, dialect.rs).

pub mod bedrock;
pub mod dialect;

use async_trait::async_trait;
use thiserror::Error;

// ────────────────────────────────────────────────────────────────────────────
// Contract
// ────────────────────────────────────────────────────────────────────────────

/// Decoding parameters forwarded to the model on every call.
///
/// Built from `Config` at the call site so the pipeline carries no
/// generation defaults of its own.
#[derive(Debug, Clone)]
pub struct GenerationParams {
    pub max_gen_len: u32,
    pub temperature: f32,
}

/// Errors a completion backend can produce.
///
/// These never cross the HTTP boundary on the incident path: callers map
/// them to the fixed degradation text instead.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("model invocation failed: {0}")]
    Invoke(String),

    #[error("model invocation timed out after {0}s")]
    Timeout(u64),

    #[error("model response was not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("model response missing expected field `{0}`")]
    MissingField(&'static str),
}

/// A text-completion capability.
///
/// The pipeline assumes nothing beyond "returns text or fails within the
/// configured timeout". Calls are single-shot: nothing here retries.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, BackendError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Reply shaping
// ────────────────────────────────────────────────────────────────────────────

/// Caps a model reply at `max_chars` characters, appending "..." when
/// anything was cut. Counts characters, not bytes, so multi-byte text is
/// never split. Output length never exceeds `max_chars` plus the marker.
pub fn truncate_reply(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let mut capped: String = text.chars().take(max_chars).collect();
    capped.push_str("...");
    capped
}

// ────────────────────────────────────────────────────────────────────────────
// Test support
// ────────────────────────────────────────────────────────────────────────────


// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
