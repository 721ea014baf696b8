use anyhow::{Context, Result};

use crate::completion::GenerationParams;

/// Application configuration loaded from environment variables.
/// Every variable has a default: with ambient AWS credentials the service
/// boots with no local configuration at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub aws_region: String,
    pub bedrock_model_id: String,
    /// Endpoint override for local Bedrock stand-ins; `None` means the real
    /// regional endpoint.
    pub bedrock_endpoint: Option<String>,
    pub max_gen_len: u32,
    pub temperature: f32,
    pub backend_timeout_secs: u64,
    pub reply_max_chars: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            aws_region: env_or("AWS_REGION", "us-east-2"),
            bedrock_model_id: env_or("BEDROCK_MODEL_ID", "us.meta.llama3-1-70b-instruct-v1:0"),
            bedrock_endpoint: std::env::var("BEDROCK_ENDPOINT").ok(),
            max_gen_len: env_or("BEDROCK_MAX_GEN_LEN", "512")
                .parse::<u32>()
                .context("BEDROCK_MAX_GEN_LEN must be an integer")?,
            temperature: env_or("BEDROCK_TEMPERATURE", "0.5")
                .parse::<f32>()
                .context("BEDROCK_TEMPERATURE must be a number")?,
            backend_timeout_secs: env_or("BEDROCK_TIMEOUT_SECS", "30")
                .parse::<u64>()
                .context("BEDROCK_TIMEOUT_SECS must be a whole number of seconds")?,
            reply_max_chars: env_or("REPLY_MAX_CHARS", "500")
                .parse::<usize>()
                .context("REPLY_MAX_CHARS must be an integer")?,
        })
    }

    /// Decoding parameters handed to the completion backend on every call.
    pub fn generation_params(&self) -> GenerationParams {
        GenerationParams {
            max_gen_len: self.max_gen_len,
            temperature: self.temperature,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
impl Config {
    /// Fixed configuration for unit tests; no environment reads.
    pub(crate) fn for_tests() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            aws_region: "us-east-2".to_string(),
            bedrock_model_id: "us.meta.llama3-1-70b-instruct-v1:0".to_string(),
            bedrock_endpoint: None,
            max_gen_len: 512,
            temperature: 0.5,
            backend_timeout_secs: 30,
            reply_max_chars: 500,
        }
    }
}
