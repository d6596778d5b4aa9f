//! Generation worker: drains the queue one request at a time
//!
//! Per request the worker runs generate -> persist snapshot -> render ->
//! compile. Any fault along the way is retried with exponential backoff up
//! to the attempt ceiling; an empty generator answer is dropped without
//! retry. Only the stop sentinel ends the worker loop; a single poisoned
//! request can never take a worker down.

use super::{GenerationRequest, RequestOutcome, RetryPolicy, WorkItem, WorkQueue, WorkerStats};
use crate::clients::{Generated, ResumeGenerator};
use crate::compile::DocumentCompiler;
use crate::error::Result;
use crate::render::{escape_resume, TexRenderer};
use crate::store::{ArtifactStore, GeneratedArtifact};
use std::sync::Arc;

pub struct GenerationWorker {
    id: usize,
    generator: Arc<dyn ResumeGenerator>,
    renderer: Arc<TexRenderer>,
    compiler: Arc<dyn DocumentCompiler>,
    store: ArtifactStore,
    retry: RetryPolicy,
}

impl GenerationWorker {
    pub fn new(
        id: usize,
        generator: Arc<dyn ResumeGenerator>,
        renderer: Arc<TexRenderer>,
        compiler: Arc<dyn DocumentCompiler>,
        store: ArtifactStore,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            id,
            generator,
            renderer,
            compiler,
            store,
            retry,
        }
    }

    /// Worker loop: dequeue, process, acknowledge, repeat until the stop
    /// sentinel arrives
    pub async fn run(self, queue: Arc<WorkQueue<WorkItem>>) -> WorkerStats {
        let mut stats = WorkerStats::default();

        loop {
            let Some(item) = queue.dequeue().await else {
                log::warn!("[worker-{}] queue closed, exiting", self.id);
                break;
            };

            match item {
                WorkItem::Stop => {
                    queue.acknowledge();
                    log::debug!("[worker-{}] received stop sentinel, exiting", self.id);
                    break;
                }
                WorkItem::Job(request) => {
                    let outcome = self.process(&request).await;
                    stats.record(outcome);
                    queue.acknowledge();
                }
            }
        }

        stats
    }

    /// Retry loop for one request
    async fn process(&self, request: &GenerationRequest) -> RequestOutcome {
        let mut delay = self.retry.initial_delay;
        let mut attempts = 0u32;

        loop {
            match self.attempt(request).await {
                Ok(Some(artifact)) => {
                    log::info!(
                        "[worker-{}] request {} compiled: {}",
                        self.id,
                        request.id,
                        artifact.pdf_path.display()
                    );
                    return RequestOutcome::Completed;
                }
                Ok(None) => {
                    log::warn!(
                        "[worker-{}] empty answer for {} ({}), dropping request",
                        self.id,
                        request.id,
                        request.candidate.name
                    );
                    return RequestOutcome::Empty;
                }
                Err(err) => {
                    attempts += 1;
                    if attempts >= self.retry.max_attempts {
                        log::error!(
                            "[worker-{}] request {} ({}) failed after {} attempts: {}",
                            self.id,
                            request.id,
                            request.candidate.name,
                            attempts,
                            err
                        );
                        return RequestOutcome::Failed;
                    }

                    log::warn!(
                        "[worker-{}] request {} attempt {} failed: {}; retrying in {:?}",
                        self.id,
                        request.id,
                        attempts,
                        err,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    delay = (delay * 2).min(self.retry.max_delay);
                }
            }
        }
    }

    /// One attempt at the full generate/persist/render/compile chain.
    ///
    /// `Ok(None)` signals an empty generator answer — dropped, not retried.
    async fn attempt(&self, request: &GenerationRequest) -> Result<Option<GeneratedArtifact>> {
        log::debug!("[worker-{}] prompt: {}", self.id, request.prompt);

        let resume = match self.generator.generate(&request.prompt).await? {
            Generated::Resume(resume) => resume,
            Generated::Empty => return Ok(None),
        };
        log::info!("[worker-{}] response received for {}", self.id, request.id);

        let base_name = self.store.base_name(&resume.name, &resume.title, &request.id);

        let snapshot_path = self.store.write_snapshot(&base_name, &resume).await?;
        log::info!("[worker-{}] snapshot saved: {}", self.id, snapshot_path.display());

        let escaped = escape_resume(&resume);
        let markup = self.renderer.render(&escaped)?;
        let markup_path = self.store.write_markup(&base_name, &markup).await?;
        log::info!("[worker-{}] markup saved: {}", self.id, markup_path.display());

        let pdf_path = self
            .compiler
            .compile(&markup_path, self.store.pdf_dir())
            .await?;

        Ok(Some(GeneratedArtifact {
            snapshot_path,
            markup_path,
            pdf_path,
        }))
    }
}
