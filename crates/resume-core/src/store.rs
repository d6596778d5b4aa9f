//! Filesystem artifact store for snapshots, rendered markup and compiled PDFs

use crate::error::Result;
use resume_types::Resume;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const JSON_DIR_NAME: &str = "resumes_json";
const TEX_DIR_NAME: &str = "resumes_latex";
const PDF_DIR_NAME: &str = "resumes_pdf";

/// Paths produced for one successfully processed request
#[derive(Debug, Clone)]
pub struct GeneratedArtifact {
    pub snapshot_path: PathBuf,
    pub markup_path: PathBuf,
    pub pdf_path: PathBuf,
}

/// Filesystem locations for the three artifact kinds
///
/// The store is cloned into every worker; workers write to distinct
/// filenames, so the shared directories need no locking.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    json_dir: PathBuf,
    tex_dir: PathBuf,
    pdf_dir: PathBuf,
}

impl ArtifactStore {
    /// Create a store rooted at `data_dir`, creating the directory structure
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let data_dir = data_dir.as_ref();

        let store = Self {
            json_dir: data_dir.join(JSON_DIR_NAME),
            tex_dir: data_dir.join(TEX_DIR_NAME),
            pdf_dir: data_dir.join(PDF_DIR_NAME),
        };

        for dir in [&store.json_dir, &store.tex_dir, &store.pdf_dir] {
            fs::create_dir_all(dir)?;
        }

        Ok(store)
    }

    pub fn pdf_dir(&self) -> &Path {
        &self.pdf_dir
    }

    /// Derive the artifact base name for one request.
    ///
    /// Candidate name and title are lower-cased and whitespace-joined with
    /// underscores; the request id's first 8 hex chars keep two candidates
    /// with the same derived name from overwriting each other.
    pub fn base_name(&self, name: &str, title: &str, request_id: &Uuid) -> String {
        let candidate = normalize(name);
        let position = normalize(title);
        let suffix = &request_id.simple().to_string()[..8];
        format!("{}_{}_{}", candidate, position, suffix)
    }

    pub fn snapshot_path(&self, base_name: &str) -> PathBuf {
        self.json_dir.join(format!("{}.json", base_name))
    }

    pub fn markup_path(&self, base_name: &str) -> PathBuf {
        self.tex_dir.join(format!("{}.tex", base_name))
    }

    pub fn pdf_path(&self, base_name: &str) -> PathBuf {
        self.pdf_dir.join(format!("{}.pdf", base_name))
    }

    /// Serialize the structured result to its durable JSON snapshot
    pub async fn write_snapshot(&self, base_name: &str, resume: &Resume) -> Result<PathBuf> {
        let path = self.snapshot_path(base_name);
        let json = serde_json::to_string_pretty(resume)?;
        tokio::fs::write(&path, json).await?;
        Ok(path)
    }

    /// Write the rendered LaTeX markup for one request
    pub async fn write_markup(&self, base_name: &str, markup: &str) -> Result<PathBuf> {
        let path = self.markup_path(base_name);
        tokio::fs::write(&path, markup).await?;
        Ok(path)
    }

    /// Remove transient build artifacts, keeping only final outputs.
    ///
    /// pdflatex drops `.aux`/`.log` files next to the compiled PDF, and the
    /// rendered `.tex` files are only inputs to the compiler; both are
    /// deleted after the batch. Snapshots and PDFs are retained.
    ///
    /// Returns the number of files removed.
    pub fn clean_transient(&self) -> Result<usize> {
        let mut removed = 0;

        for entry in fs::read_dir(&self.pdf_dir)? {
            let path = entry?.path();
            if path.is_file() && path.extension().map_or(true, |ext| ext != "pdf") {
                fs::remove_file(&path)?;
                removed += 1;
            }
        }

        for entry in fs::read_dir(&self.tex_dir)? {
            let path = entry?.path();
            if path.is_file() {
                fs::remove_file(&path)?;
                removed += 1;
            }
        }

        Ok(removed)
    }
}

fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}
