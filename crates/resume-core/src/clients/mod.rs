//! Client modules for external services

pub mod llm;

pub use llm::{Generated, OpenAiGenerator, ResumeGenerator};
