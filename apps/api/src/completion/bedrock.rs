// AWS Bedrock implementation of the completion contract.

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_bedrockruntime::error::DisplayErrorContext;
use aws_sdk_bedrockruntime::primitives::Blob;
use aws_sdk_bedrockruntime::Client;
use serde_json::Value;
use tracing::debug;

use crate::completion::dialect::ModelDialect;
use crate::completion::{BackendError, CompletionBackend, GenerationParams};

/// Completion backend that calls Bedrock `InvokeModel`.
///
/// One model id per process; the request/response JSON shape comes from the
/// dialect derived from that id at construction. Calls are single-shot (no
/// retries) and bounded by `timeout`; the caller owns what happens on
/// failure.
pub struct BedrockBackend {
    client: Client,
    model_id: String,
    dialect: ModelDialect,
    timeout: Duration,
}

impl BedrockBackend {
    pub fn new(client: Client, model_id: String, timeout: Duration) -> Self {
        let dialect = ModelDialect::for_model_id(&model_id);
        Self {
            client,
            model_id,
            dialect,
            timeout,
        }
    }

    async fn invoke(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, BackendError> {
        let body = self.dialect.render_request(prompt, params);

        let response = self
            .client
            .invoke_model()
            .model_id(&self.model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(body.to_string().into_bytes()))
            .send()
            .await
            .map_err(|e| BackendError::Invoke(DisplayErrorContext(e).to_string()))?;

        let parsed: Value = serde_json::from_slice(response.body().as_ref())?;
        self.dialect.extract_text(&parsed)
    }
}

#[async_trait]
impl CompletionBackend for BedrockBackend {
    async fn complete(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, BackendError> {
        debug!(
            model_id = %self.model_id,
            prompt_chars = prompt.chars().count(),
            "Invoking Bedrock model"
        );

        match tokio::time::timeout(self.timeout, self.invoke(prompt, params)).await {
            Ok(result) => result,
            Err(_) => Err(BackendError::Timeout(self.timeout.as_secs())),
        }
    }
}
