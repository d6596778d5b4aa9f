//! Content generator client for an OpenAI-compatible chat completions API

use crate::config::LlmConfig;
use crate::error::{ResumeError, Result};
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use resume_types::{resume_json_schema, Resume};
use serde_json::json;

const SYSTEM_PROMPT: &str =
    "Your task is to produce structured output that conforms to the provided schema.";

const SAMPLING_TEMPERATURE: f64 = 0.15;

/// Non-error outcome of one generation call.
///
/// `Empty` is a generator policy decision, not a fault: retrying the same
/// prompt would likely produce the same empty answer, so the worker drops
/// the request instead of retrying.
#[derive(Debug, Clone)]
pub enum Generated {
    Resume(Resume),
    Empty,
}

/// External content generator, called once per attempt on a request.
///
/// Transport errors, timeouts and unparseable output surface as `Err` and
/// are retryable; an absent answer surfaces as `Ok(Generated::Empty)`.
#[async_trait]
pub trait ResumeGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<Generated>;
}

/// Generator backed by an OpenAI-compatible `/chat/completions` endpoint
pub struct OpenAiGenerator {
    config: LlmConfig,
    http_client: HttpClient,
}

impl OpenAiGenerator {
    pub fn new(config: LlmConfig) -> Self {
        let http_client = HttpClient::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            http_client,
        }
    }
}

#[async_trait]
impl ResumeGenerator for OpenAiGenerator {
    async fn generate(&self, prompt: &str) -> Result<Generated> {
        let api_url = format!("{}/chat/completions", self.config.api_url.trim_end_matches('/'));

        let response = self
            .http_client
            .post(&api_url)
            .bearer_auth(&self.config.api_token)
            .json(&json!({
                "model": self.config.model,
                "messages": [
                    { "role": "system", "content": SYSTEM_PROMPT },
                    { "role": "user", "content": prompt }
                ],
                "temperature": SAMPLING_TEMPERATURE,
                "response_format": {
                    "type": "json_schema",
                    "json_schema": {
                        "name": "resume",
                        "strict": true,
                        "schema": resume_json_schema()
                    }
                }
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ResumeError::ServiceUnavailable(format!(
                "Generation API returned {}",
                response.status()
            )));
        }

        let result: serde_json::Value = response.json().await?;

        let content = match result["choices"][0]["message"]["content"].as_str() {
            Some(text) if !text.trim().is_empty() => text,
            _ => return Ok(Generated::Empty),
        };

        // Malformed model output is a transient fault; the retry loop may
        // get a parseable answer on the next attempt.
        let resume: Resume = serde_json::from_str(content)?;

        Ok(Generated::Resume(resume))
    }
}
