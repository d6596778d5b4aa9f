//! Document compiler invocation

use crate::error::{ResumeError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// External document compiler, invoked once per compile attempt.
///
/// Success means the compiled file exists at a deterministic path derived
/// from the markup file's base name. A non-zero exit is a retryable failure
/// for the request being processed, never worker-fatal.
#[async_trait]
pub trait DocumentCompiler: Send + Sync {
    async fn compile(&self, markup_path: &Path, output_dir: &Path) -> Result<PathBuf>;
}

/// Compiler backed by a `pdflatex` subprocess
pub struct PdfLatexCompiler;

#[async_trait]
impl DocumentCompiler for PdfLatexCompiler {
    async fn compile(&self, markup_path: &Path, output_dir: &Path) -> Result<PathBuf> {
        let output = Command::new("pdflatex")
            .arg("-interaction=nonstopmode")
            .arg(format!("-output-directory={}", output_dir.display()))
            .arg(markup_path)
            .output()
            .await?;

        if !output.status.success() {
            log::debug!(
                "pdflatex stderr for {}: {}",
                markup_path.display(),
                String::from_utf8_lossy(&output.stderr)
            );
            return Err(ResumeError::Compile(format!(
                "pdflatex exited with {} for {}",
                output.status,
                markup_path.display()
            )));
        }

        let pdf_name = markup_path.with_extension("pdf");
        let pdf_name = pdf_name.file_name().ok_or_else(|| {
            ResumeError::Compile(format!("Invalid markup path: {}", markup_path.display()))
        })?;

        Ok(output_dir.join(pdf_name))
    }
}
