// Model-family request/response dialects for Bedrock `InvokeModel`.
//
// Each Bedrock model family speaks its own JSON: the prompt field, the
// generation-parameter names, and where the completion text lives all
// differ. This is the single place that knows those shapes; the rest of
// the crate sees only `complete() -> Result<String, _>`.

use serde_json::{json, Value};

use crate::completion::{BackendError, GenerationParams};

/// Request/response JSON shape for one Bedrock model family.
///
/// Selected from the configured model id at startup. Supporting another
/// family means one new variant and its two match arms here, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelDialect {
    /// Meta Llama instruct models: `prompt` in, `generation` out.
    Llama,
    /// Amazon Titan text models: `inputText` in, `results[0].outputText` out.
    Titan,
    /// Anthropic models via the Bedrock messages API: `messages` in, first
    /// `content` block of type "text" out.
    Anthropic,
}

impl ModelDialect {
    /// Picks the dialect for a configured model id.
    ///
    /// Ids look like "us.meta.llama3-1-70b-instruct-v1:0",
    /// "amazon.titan-text-express-v1" or "anthropic.claude-3-haiku-...".
    /// Unrecognized ids fall back to Llama, the default deployment.
    pub fn for_model_id(model_id: &str) -> Self {
        let id = model_id.to_ascii_lowercase();

        if id.contains("titan") {
            ModelDialect::Titan
        } else if id.contains("anthropic") || id.contains("claude") {
            ModelDialect::Anthropic
        } else {
            ModelDialect::Llama
        }
    }

    /// Builds the `InvokeModel` request body for this family.
    pub fn render_request(&self, prompt: &str, params: &GenerationParams) -> Value {
        match self {
            ModelDialect::Llama => json!({
                "prompt": prompt,
                "max_gen_len": params.max_gen_len,
                "temperature": params.temperature,
            }),
            ModelDialect::Titan => json!({
                "inputText": prompt,
                "textGenerationConfig": {
                    "maxTokenCount": params.max_gen_len,
                    "temperature": params.temperature,
                },
            }),
            ModelDialect::Anthropic => json!({
                "anthropic_version": "bedrock-2023-05-31",
                "max_tokens": params.max_gen_len,
                "temperature": params.temperature,
                "messages": [{ "role": "user", "content": prompt }],
            }),
        }
    }

    /// Pulls the completion text out of a parsed response body.
    ///
    /// A body that parses as JSON but lacks the expected field is a
    /// malformed response, not an empty success.
    pub fn extract_text(&self, body: &Value) -> Result<String, BackendError> {
        let text = match self {
            ModelDialect::Llama => body
                .get("generation")
                .and_then(Value::as_str)
                .ok_or(BackendError::MissingField("generation"))?,

            ModelDialect::Titan => body
                .pointer("/results/0/outputText")
                .and_then(Value::as_str)
                .ok_or(BackendError::MissingField("results[0].outputText"))?,

            ModelDialect::Anthropic => body
                .get("content")
                .and_then(Value::as_array)
                .and_then(|blocks| {
                    blocks
                        .iter()
                        .find(|block| block.get("type").and_then(Value::as_str) == Some("text"))
                })
                .and_then(|block| block.get("text"))
                .and_then(Value::as_str)
                .ok_or(BackendError::MissingField("content[].text"))?,
        };

        Ok(text.to_string())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
