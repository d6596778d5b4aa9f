//! Configuration management for the resume generation pipeline

use crate::error::{ResumeError, Result};
use crate::pipeline::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure, loaded from a JSON file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeConfig {
    pub llm: LlmConfig,

    /// Size of the generation worker pool
    #[serde(default = "default_workers_num")]
    pub workers_num: usize,

    /// Queue capacity as a multiple of the worker count
    #[serde(default = "default_queue_capacity_multiplier")]
    pub queue_capacity_multiplier: usize,

    /// Attempt ceiling for a single request
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Initial backoff delay in seconds
    #[serde(default = "default_retry_delay_secs")]
    pub retry_delay_secs: u64,

    /// Backoff ceiling in seconds; the doubling delay never exceeds this
    #[serde(default = "default_max_retry_delay_secs")]
    pub max_retry_delay_secs: u64,

    /// Prompt template with a `{candidate}` placeholder
    #[serde(default = "default_prompt_path")]
    pub prompt_path: PathBuf,

    /// Handlebars LaTeX template for rendered resumes
    #[serde(default = "default_template_path")]
    pub template_path: PathBuf,

    /// Root directory for snapshots, rendered markup and compiled PDFs
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

/// Connection settings for the OpenAI-compatible generation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    pub model: String,
    pub api_url: String,
    pub api_token: String,
}

fn default_workers_num() -> usize {
    20
}

fn default_queue_capacity_multiplier() -> usize {
    2
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay_secs() -> u64 {
    15
}

fn default_max_retry_delay_secs() -> u64 {
    120
}

fn default_prompt_path() -> PathBuf {
    PathBuf::from("config/resume_prompt.txt")
}

fn default_template_path() -> PathBuf {
    PathBuf::from("config/resume_template.tex")
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

impl ResumeConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ResumeError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_json_str(&content)
    }

    /// Load configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ResumeError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.llm.model.is_empty() {
            return Err(ResumeError::Config("LLM model is required".to_string()));
        }

        if self.llm.api_url.is_empty() {
            return Err(ResumeError::Config("LLM API url is required".to_string()));
        }

        if self.workers_num == 0 {
            return Err(ResumeError::Config(
                "workers_num must be at least 1".to_string(),
            ));
        }

        if self.queue_capacity_multiplier == 0 {
            return Err(ResumeError::Config(
                "queue_capacity_multiplier must be at least 1".to_string(),
            ));
        }

        if self.max_retries == 0 {
            return Err(ResumeError::Config(
                "max_retries must be at least 1".to_string(),
            ));
        }

        if self.retry_delay_secs > self.max_retry_delay_secs {
            return Err(ResumeError::Config(format!(
                "retry_delay_secs ({}) exceeds max_retry_delay_secs ({})",
                self.retry_delay_secs, self.max_retry_delay_secs
            )));
        }

        Ok(())
    }

    /// Bounded queue capacity derived from the worker count
    pub fn queue_capacity(&self) -> usize {
        self.workers_num * self.queue_capacity_multiplier
    }

    /// Per-request retry policy derived from the retry settings
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_retries,
            initial_delay: Duration::from_secs(self.retry_delay_secs),
            max_delay: Duration::from_secs(self.max_retry_delay_secs),
        }
    }
}
