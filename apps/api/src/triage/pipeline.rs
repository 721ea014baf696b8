// Incident pipeline: classify, look up the playbook, compose prompts, call
// the completion backend, record the result.
//
// The pipeline is total. Backend trouble degrades the affected field to a
// fixed error string and the request still succeeds; a model outage must
// never block intake. CRITICAL: the record is appended before returning in
// every case, so the log and the responses callers saw never diverge.

use tracing::{info, warn};

use crate::completion::{truncate_reply, CompletionBackend, GenerationParams};
use crate::config::Config;
use crate::incident_log::IncidentLog;
use crate::triage::classifier::{classify_category, classify_severity};
use crate::triage::models::{IncidentRecord, IncidentReport};
use crate::triage::playbook::sop_steps;
use crate::triage::prompts::{build_guidance_prompt, build_summary_prompt};

/// Substituted for any record field whose backend call failed. This exact
/// string is the visible degradation marker; operators grep for it.
pub const BACKEND_FAILURE_TEXT: &str = "Error: Unable to process request";

/// Processes one incident report end to end and appends the result to the
/// log. Infallible by contract: every input yields a fully-populated
/// record.
pub async fn process_incident(
    log: &IncidentLog,
    backend: &dyn CompletionBackend,
    config: &Config,
    report: IncidentReport,
) -> IncidentRecord {
    // Step 1: classify severity and category from the raw text
    let severity = classify_severity(&report.message);
    let category = classify_category(&report.message);
    info!(
        severity = ?severity,
        category = category.label(),
        "Incident classified"
    );

    // Step 2: resolve the SOP playbook (falls back, never fails)
    let steps = sop_steps(category);
    let params = config.generation_params();

    // Steps 3-4: responder summary, then citizen guidance
    let summary_prompt = build_summary_prompt(&report.message);
    let responder_summary = complete_or_substitute(
        backend,
        &summary_prompt,
        &params,
        config.reply_max_chars,
        "responder summary",
    )
    .await;

    let guidance_prompt = build_guidance_prompt(&report.message, category, steps);
    let citizen_guidance = complete_or_substitute(
        backend,
        &guidance_prompt,
        &params,
        config.reply_max_chars,
        "citizen guidance",
    )
    .await;

    // Step 5: assemble, append, return
    let record = IncidentRecord {
        severity,
        responder_summary,
        citizen_guidance,
    };
    log.append(record.clone());
    info!("Incident processed and appended to log");

    record
}

/// Runs one backend call under the substitution policy: success is trimmed
/// and capped, any failure becomes the fixed error text.
async fn complete_or_substitute(
    backend: &dyn CompletionBackend,
    prompt: &str,
    params: &GenerationParams,
    reply_max_chars: usize,
    field: &str,
) -> String {
    match backend.complete(prompt, params).await {
        Ok(text) => truncate_reply(&text, reply_max_chars),
        Err(e) => {
            warn!(error = %e, "Backend call for {field} failed, substituting error text");
            BACKEND_FAILURE_TEXT.to_string()
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
