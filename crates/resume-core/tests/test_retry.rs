//! Retry and backoff behavior at the worker level
//!
//! These tests drive a single worker directly through the queue so the
//! paused tokio clock measures only this worker's backoff sleeps.

mod common;

use common::*;
use resume_core::pipeline::{GenerationRequest, GenerationWorker, WorkItem, WorkQueue};
use resume_core::{ArtifactStore, DocumentCompiler, ResumeGenerator, RetryPolicy};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

fn request_for(name: &str, job: &str) -> GenerationRequest {
    let candidate = candidate(name, job);
    let prompt = serde_json::to_string(&candidate).unwrap();
    GenerationRequest::new(candidate, prompt)
}

fn worker(
    generator: Arc<dyn ResumeGenerator>,
    compiler: Arc<dyn DocumentCompiler>,
    store: ArtifactStore,
    retry: RetryPolicy,
) -> GenerationWorker {
    GenerationWorker::new(0, generator, Arc::new(test_renderer()), compiler, store, retry)
}

#[tokio::test(start_paused = true)]
async fn test_transient_fault_recovers_with_two_backoffs() {
    let dir = tempfile::tempdir().unwrap();
    let store = ArtifactStore::new(dir.path()).unwrap();
    let generator = Arc::new(FlakyGenerator::new(2));
    let compiler = Arc::new(StubCompiler::default());

    let queue = Arc::new(WorkQueue::bounded(2));
    let handle = tokio::spawn(
        worker(generator.clone(), compiler, store.clone(), RetryPolicy::default())
            .run(Arc::clone(&queue)),
    );

    queue.enqueue(WorkItem::Job(request_for("Jane Doe", "Tester"))).await.unwrap();
    // The worker must still be alive after the retries to take the sentinel.
    queue.enqueue(WorkItem::Stop).await.unwrap();
    queue.join().await;

    let stats = handle.await.unwrap();
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.failed, 0);

    // Two failures before success: backoff sleeps of 15s then 30s.
    assert_eq!(generator.calls.load(Ordering::SeqCst), 3);
    assert_eq!(generator.gap_secs(), vec![15, 30]);

    assert_eq!(count_files_with_ext(store.pdf_dir(), "pdf"), 1);
}

#[tokio::test(start_paused = true)]
async fn test_backoff_doubles_and_caps_at_ceiling() {
    let dir = tempfile::tempdir().unwrap();
    let store = ArtifactStore::new(dir.path()).unwrap();
    let generator = Arc::new(FlakyGenerator::new(5));
    let compiler = Arc::new(StubCompiler::default());
    let retry = RetryPolicy {
        max_attempts: 6,
        initial_delay: Duration::from_secs(15),
        max_delay: Duration::from_secs(120),
    };

    let queue = Arc::new(WorkQueue::bounded(2));
    let handle = tokio::spawn(
        worker(generator.clone(), compiler, store.clone(), retry).run(Arc::clone(&queue)),
    );

    queue.enqueue(WorkItem::Job(request_for("John Smith", "Developer"))).await.unwrap();
    queue.enqueue(WorkItem::Stop).await.unwrap();
    queue.join().await;

    let stats = handle.await.unwrap();
    assert_eq!(stats.completed, 1);

    // Doubling sequence capped at the 120s ceiling.
    assert_eq!(generator.gap_secs(), vec![15, 30, 60, 120, 120]);
}

#[tokio::test(start_paused = true)]
async fn test_exhausted_request_is_dropped_and_batch_continues() {
    let dir = tempfile::tempdir().unwrap();
    let store = ArtifactStore::new(dir.path()).unwrap();
    let generator = Arc::new(EchoGenerator::default());
    let compiler = Arc::new(StubCompiler::default());
    let retry = RetryPolicy {
        max_attempts: 3,
        initial_delay: Duration::from_secs(15),
        max_delay: Duration::from_secs(120),
    };

    let queue = Arc::new(WorkQueue::bounded(6));
    let mut handles = Vec::new();
    for id in 0..3 {
        let worker = GenerationWorker::new(
            id,
            generator.clone(),
            Arc::new(test_renderer()),
            compiler.clone(),
            store.clone(),
            retry,
        );
        handles.push(tokio::spawn(worker.run(Arc::clone(&queue))));
    }

    // Five requests; the marked candidate's markup is rejected by the
    // compiler on every attempt.
    for i in 0..4 {
        let request = request_for(&format!("Candidate {}", i), "Engineer");
        queue.enqueue(WorkItem::Job(request)).await.unwrap();
    }
    let poisoned = request_for(&format!("{} Smith", COMPILE_BOMB), "Engineer");
    queue.enqueue(WorkItem::Job(poisoned)).await.unwrap();
    for _ in 0..3 {
        queue.enqueue(WorkItem::Stop).await.unwrap();
    }

    queue.join().await;

    let mut completed = 0;
    let mut failed = 0;
    for handle in handles {
        let stats = handle.await.unwrap();
        completed += stats.completed;
        failed += stats.failed;
    }

    assert_eq!(completed, 4);
    assert_eq!(failed, 1);

    // Four artifacts; the poisoned request compiled nothing but was
    // attempted up to the ceiling.
    assert_eq!(count_files_with_ext(store.pdf_dir(), "pdf"), 4);
    assert_eq!(compiler.compile_calls.load(Ordering::SeqCst), 4 + 3);
}
