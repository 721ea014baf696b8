// Axum handlers for the incident API.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::completion::truncate_reply;
use crate::errors::AppError;
use crate::state::AppState;
use crate::triage::models::{IncidentRecord, IncidentReport};
use crate::triage::pipeline::process_incident;

/// POST /incident
///
/// Runs the full triage pipeline. Always 200 with a fully-populated record:
/// backend trouble degrades fields, it never fails the request. The only
/// non-200 outcome is a malformed body.
pub async fn handle_incident(
    State(state): State<AppState>,
    payload: Result<Json<IncidentReport>, JsonRejection>,
) -> Result<Json<IncidentRecord>, AppError> {
    let Json(report) = payload?;
    info!("Received incident report ({} chars)", report.message.chars().count());

    let record = process_incident(&state.log, state.backend.as_ref(), &state.config, report).await;

    Ok(Json(record))
}

/// GET /incidents
///
/// Snapshot of every record processed by this process, oldest first.
pub async fn handle_list_incidents(State(state): State<AppState>) -> Json<Vec<IncidentRecord>> {
    let records = state.log.list_all();
    info!("Fetching all incidents, count: {}", records.len());

    Json(records)
}

fn default_test_prompt() -> String {
    "Say hello from Bedrock!".to_string()
}

/// Body for the backend diagnostic endpoint. The prompt is optional; an
/// empty body (`{}`) exercises the backend with a canned greeting.
#[derive(Debug, Deserialize)]
pub struct BedrockTestRequest {
    #[serde(default = "default_test_prompt")]
    pub prompt: String,
}

/// POST /bedrock-test
///
/// Diagnostic endpoint: sends one prompt straight to the completion
/// backend, bypassing the triage pipeline. Backend errors come back
/// verbatim in the body (still 200) so operators can see exactly what
/// the model integration reported.
pub async fn handle_bedrock_test(
    State(state): State<AppState>,
    payload: Result<Json<BedrockTestRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = payload?;
    info!("Bedrock test invoked ({} chars)", request.prompt.chars().count());

    let params = state.config.generation_params();
    let body = match state.backend.complete(&request.prompt, &params).await {
        Ok(text) => json!({
            "bedrock_text": truncate_reply(&text, state.config.reply_max_chars)
        }),
        Err(e) => {
            warn!(error = %e, "Bedrock test call failed");
            json!({ "error": e.to_string() })
        }
    };

    Ok(Json(body))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
