//! Pipeline coordinator: owns the queue, the worker pool and shutdown

use super::{GenerationWorker, RetryPolicy, WorkItem, WorkQueue, WorkerStats};
use crate::clients::{OpenAiGenerator, ResumeGenerator};
use crate::compile::{DocumentCompiler, PdfLatexCompiler};
use crate::config::ResumeConfig;
use crate::error::Result;
use crate::render::TexRenderer;
use crate::store::ArtifactStore;
use crate::synth::CandidateSynthesizer;
use chrono::{DateTime, Utc};
use futures::future::join_all;
use std::sync::Arc;

/// Best-effort batch report: per-item failures never fail the batch
#[derive(Debug, Clone)]
pub struct BatchSummary {
    pub requested: usize,
    pub completed: usize,
    pub empty: usize,
    pub failed: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl BatchSummary {
    fn absorb(&mut self, stats: WorkerStats) {
        self.completed += stats.completed;
        self.empty += stats.empty;
        self.failed += stats.failed;
    }
}

/// Owns the process-scoped pipeline resources and runs batches.
///
/// The generator client, template renderer and compiler are constructed
/// once at pipeline start and injected into every worker; no ambient
/// global state.
pub struct PipelineCoordinator {
    generator: Arc<dyn ResumeGenerator>,
    renderer: Arc<TexRenderer>,
    compiler: Arc<dyn DocumentCompiler>,
    synthesizer: CandidateSynthesizer,
    store: ArtifactStore,
    workers_num: usize,
    queue_capacity: usize,
    retry: RetryPolicy,
}

impl PipelineCoordinator {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        generator: Arc<dyn ResumeGenerator>,
        renderer: Arc<TexRenderer>,
        compiler: Arc<dyn DocumentCompiler>,
        synthesizer: CandidateSynthesizer,
        store: ArtifactStore,
        workers_num: usize,
        queue_capacity: usize,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            generator,
            renderer,
            compiler,
            synthesizer,
            store,
            workers_num,
            queue_capacity,
            retry,
        }
    }

    /// Assemble the production pipeline from configuration: OpenAI-compatible
    /// generator, file-based templates and a pdflatex compiler
    pub fn from_config(config: &ResumeConfig) -> Result<Self> {
        let generator = Arc::new(OpenAiGenerator::new(config.llm.clone()));
        let renderer = Arc::new(TexRenderer::from_file(&config.template_path)?);
        let synthesizer = CandidateSynthesizer::from_file(&config.prompt_path)?;
        let store = ArtifactStore::new(&config.data_dir)?;

        Ok(Self::new(
            generator,
            renderer,
            Arc::new(PdfLatexCompiler),
            synthesizer,
            store,
            config.workers_num,
            config.queue_capacity(),
            config.retry_policy(),
        ))
    }

    /// Run one batch of `n` generation requests to completion.
    ///
    /// Spawns the worker pool, feeds the queue (blocking on backpressure as
    /// workers make room), appends one stop sentinel per worker, then waits
    /// for the queue to drain and every worker to exit before cleaning up
    /// transient artifacts.
    pub async fn generate_batch(&self, n: usize) -> Result<BatchSummary> {
        let started_at = Utc::now();
        log::info!("Starting batch of {} resumes", n);

        let queue = Arc::new(WorkQueue::bounded(self.queue_capacity));

        let mut handles = Vec::with_capacity(self.workers_num);
        for id in 0..self.workers_num {
            let worker = GenerationWorker::new(
                id,
                Arc::clone(&self.generator),
                Arc::clone(&self.renderer),
                Arc::clone(&self.compiler),
                self.store.clone(),
                self.retry,
            );
            let queue = Arc::clone(&queue);
            handles.push(tokio::spawn(worker.run(queue)));
        }
        log::info!("Spawned {} workers", self.workers_num);

        for _ in 0..n {
            let request = self.synthesizer.request()?;
            queue.enqueue(WorkItem::Job(request)).await?;
        }
        for _ in 0..self.workers_num {
            queue.enqueue(WorkItem::Stop).await?;
        }

        queue.join().await;

        let mut summary = BatchSummary {
            requested: n,
            completed: 0,
            empty: 0,
            failed: 0,
            started_at,
            finished_at: started_at,
        };
        for result in join_all(handles).await {
            match result {
                Ok(stats) => summary.absorb(stats),
                Err(e) => log::error!("Worker task panicked: {}", e),
            }
        }

        let removed = self.store.clean_transient()?;
        log::info!("Temp files cleaned ({} removed)", removed);

        summary.finished_at = Utc::now();
        log::info!(
            "Batch finished: {} completed, {} empty, {} failed of {} requested",
            summary.completed,
            summary.empty,
            summary.failed,
            summary.requested
        );

        Ok(summary)
    }
}
