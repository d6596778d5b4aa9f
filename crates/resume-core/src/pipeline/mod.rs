//! Bounded concurrent generation pipeline
//!
//! A producer feeds generation requests into a fixed-capacity queue; a pool
//! of workers drains it under backpressure, retrying transient faults per
//! request with exponential backoff. The coordinator owns both sides and
//! guarantees deterministic shutdown: one sentinel per worker, queue join,
//! worker join, then artifact cleanup.

pub mod coordinator;
pub mod queue;
pub mod worker;

pub use coordinator::{BatchSummary, PipelineCoordinator};
pub use queue::WorkQueue;
pub use worker::GenerationWorker;

use resume_types::CandidateInput;
use std::time::Duration;
use uuid::Uuid;

/// One unit of work, immutable once enqueued and consumed by exactly one
/// worker.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub id: Uuid,
    pub candidate: CandidateInput,
    pub prompt: String,
}

impl GenerationRequest {
    pub fn new(candidate: CandidateInput, prompt: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            candidate,
            prompt,
        }
    }
}

/// Queue item: either a real request or the per-worker stop sentinel
#[derive(Debug)]
pub enum WorkItem {
    Job(GenerationRequest),
    Stop,
}

/// Per-request retry settings.
///
/// The delay doubles after each failed attempt and never exceeds
/// `max_delay`; with the defaults (15s initial, 120s ceiling) the sequence
/// is 15, 30, 60, 120, 120, ...
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_secs(15),
            max_delay: Duration::from_secs(120),
        }
    }
}

/// Terminal state of one processed request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// Snapshot written, markup rendered, PDF compiled
    Completed,
    /// Generator returned no usable content; dropped without retry
    Empty,
    /// Attempt ceiling reached; dropped
    Failed,
}

/// Counters accumulated by one worker over its lifetime
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerStats {
    pub completed: usize,
    pub empty: usize,
    pub failed: usize,
}

impl WorkerStats {
    pub fn record(&mut self, outcome: RequestOutcome) {
        match outcome {
            RequestOutcome::Completed => self.completed += 1,
            RequestOutcome::Empty => self.empty += 1,
            RequestOutcome::Failed => self.failed += 1,
        }
    }
}
