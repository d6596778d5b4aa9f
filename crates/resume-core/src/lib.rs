//! Resume generation pipeline core library
//!
//! Turns synthesized candidate records into compiled PDF resumes through an
//! external text-generation call, a LaTeX templating step and a pdflatex
//! invocation, all driven by a bounded concurrent worker pool.

pub mod clients;
pub mod compile;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod render;
pub mod store;
pub mod synth;

// Re-export main types for easy access
pub use config::{LlmConfig, ResumeConfig};
pub use error::{ResumeError, Result};

pub use clients::{Generated, OpenAiGenerator, ResumeGenerator};
pub use compile::{DocumentCompiler, PdfLatexCompiler};
pub use pipeline::{
    BatchSummary, GenerationRequest, PipelineCoordinator, RetryPolicy, WorkItem, WorkQueue,
};
pub use render::TexRenderer;
pub use store::{ArtifactStore, GeneratedArtifact};
pub use synth::CandidateSynthesizer;
