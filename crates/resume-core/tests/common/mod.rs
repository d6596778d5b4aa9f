//! Shared mocks and fixtures for pipeline integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use resume_core::{DocumentCompiler, Generated, ResumeError, ResumeGenerator, Result, TexRenderer};
use resume_types::{CandidateInput, Contacts, Resume};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::time::Instant;

/// Marker that makes [`StubCompiler`] reject the rendered markup
pub const COMPILE_BOMB: &str = "COMPILEBOMB";

/// Template used by all tests; routes name, title and summary into markup
pub fn test_renderer() -> TexRenderer {
    TexRenderer::from_template_str("{{name}} -- {{title}}\n{{summary}}\n").unwrap()
}

pub fn candidate(name: &str, job: &str) -> CandidateInput {
    CandidateInput {
        name: name.to_string(),
        phone_number: "+1 555 000-00-00".to_string(),
        desired_job: job.to_string(),
        years_of_experience: 5,
        location: "Germany".to_string(),
    }
}

/// Build the resume a generator would return for a candidate
pub fn resume_for(candidate: &CandidateInput) -> Resume {
    Resume {
        name: candidate.name.clone(),
        contact_info: Contacts {
            phone: candidate.phone_number.clone(),
            email: "candidate@example.com".to_string(),
            linkedin: None,
            github: None,
            location: candidate.location.clone(),
        },
        title: candidate.desired_job.clone(),
        summary: format!(
            "{} with {} years of experience.",
            candidate.desired_job, candidate.years_of_experience
        ),
        skills: None,
        experience: None,
        education: None,
        languages: None,
        certifications: None,
        hobbies: None,
        portfolio: None,
    }
}

fn resume_from_prompt(prompt: &str) -> Resume {
    match serde_json::from_str::<CandidateInput>(prompt) {
        Ok(candidate) => resume_for(&candidate),
        Err(_) => resume_for(&candidate("Jane Doe", "Tester")),
    }
}

/// Generator that parses the prompt as candidate JSON and answers with a
/// matching resume. Counts calls.
#[derive(Default)]
pub struct EchoGenerator {
    pub calls: AtomicUsize,
}

#[async_trait]
impl ResumeGenerator for EchoGenerator {
    async fn generate(&self, prompt: &str) -> Result<Generated> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Generated::Resume(resume_from_prompt(prompt)))
    }
}

/// Generator that always answers with an empty result
#[derive(Default)]
pub struct EmptyGenerator {
    pub calls: AtomicUsize,
}

#[async_trait]
impl ResumeGenerator for EmptyGenerator {
    async fn generate(&self, _prompt: &str) -> Result<Generated> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Generated::Empty)
    }
}

/// Generator that fails every call with a transient fault
#[derive(Default)]
pub struct FailingGenerator {
    pub calls: AtomicUsize,
}

#[async_trait]
impl ResumeGenerator for FailingGenerator {
    async fn generate(&self, _prompt: &str) -> Result<Generated> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ResumeError::ServiceUnavailable("injected fault".to_string()))
    }
}

/// Generator that fails the first `fail_times` calls, then succeeds.
/// Records the (tokio) instant of every call so tests can assert backoff
/// gaps under a paused clock.
pub struct FlakyGenerator {
    fail_times: usize,
    pub calls: AtomicUsize,
    pub call_instants: Mutex<Vec<Instant>>,
}

impl FlakyGenerator {
    pub fn new(fail_times: usize) -> Self {
        Self {
            fail_times,
            calls: AtomicUsize::new(0),
            call_instants: Mutex::new(Vec::new()),
        }
    }

    /// Gaps between consecutive generate calls, in whole seconds
    pub fn gap_secs(&self) -> Vec<u64> {
        let instants = self.call_instants.lock().unwrap();
        instants
            .windows(2)
            .map(|pair| (pair[1] - pair[0]).as_secs())
            .collect()
    }
}

#[async_trait]
impl ResumeGenerator for FlakyGenerator {
    async fn generate(&self, prompt: &str) -> Result<Generated> {
        self.call_instants.lock().unwrap().push(Instant::now());
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.fail_times {
            return Err(ResumeError::ServiceUnavailable(format!(
                "injected fault on call {}",
                call + 1
            )));
        }
        Ok(Generated::Resume(resume_from_prompt(prompt)))
    }
}

/// Compiler that writes a stub PDF instead of invoking pdflatex.
///
/// Rejects markup containing [`COMPILE_BOMB`] with a non-zero-exit style
/// error, which the worker must treat as retryable.
#[derive(Default)]
pub struct StubCompiler {
    pub compile_calls: AtomicUsize,
}

#[async_trait]
impl DocumentCompiler for StubCompiler {
    async fn compile(&self, markup_path: &Path, output_dir: &Path) -> Result<PathBuf> {
        self.compile_calls.fetch_add(1, Ordering::SeqCst);

        let markup = tokio::fs::read_to_string(markup_path).await?;
        if markup.contains(COMPILE_BOMB) {
            return Err(ResumeError::Compile(format!(
                "stub compiler exited with exit status: 1 for {}",
                markup_path.display()
            )));
        }

        let pdf_name = markup_path.with_extension("pdf");
        let pdf_name = pdf_name.file_name().expect("markup path has a file name");
        let pdf_path = output_dir.join(pdf_name);
        tokio::fs::write(&pdf_path, b"%PDF-1.4 stub").await?;
        Ok(pdf_path)
    }
}

/// Count files with the given extension in a directory
pub fn count_files_with_ext(dir: &Path, ext: &str) -> usize {
    std::fs::read_dir(dir)
        .unwrap()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .map_or(false, |e| e == ext)
        })
        .count()
}
