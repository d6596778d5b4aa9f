//! Bounded work queue with acknowledge/join semantics
//!
//! A fixed-capacity FIFO channel between the producer and the worker pool.
//! `enqueue` blocks at capacity, `dequeue` blocks when empty, and `join`
//! blocks until every enqueued item has been acknowledged. Dequeued items
//! count as unfinished until the worker calls `acknowledge`.

use crate::error::{ResumeError, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Notify;

pub struct WorkQueue<T> {
    tx: async_channel::Sender<T>,
    rx: async_channel::Receiver<T>,
    unfinished: AtomicUsize,
    drained: Notify,
}

impl<T> WorkQueue<T> {
    /// Create a queue holding at most `capacity` undelivered items
    pub fn bounded(capacity: usize) -> Self {
        let (tx, rx) = async_channel::bounded(capacity);
        Self {
            tx,
            rx,
            unfinished: AtomicUsize::new(0),
            drained: Notify::new(),
        }
    }

    /// Enqueue one item, blocking while the queue is at capacity
    pub async fn enqueue(&self, item: T) -> Result<()> {
        // Counted before the send so that join() observes the item even
        // while the producer is blocked on backpressure.
        self.unfinished.fetch_add(1, Ordering::AcqRel);

        if self.tx.send(item).await.is_err() {
            self.acknowledge();
            return Err(ResumeError::QueueClosed);
        }

        Ok(())
    }

    /// Dequeue one item, blocking while the queue is empty.
    ///
    /// Returns `None` only if the channel has been closed, which does not
    /// happen during normal operation — workers exit on the stop sentinel.
    pub async fn dequeue(&self) -> Option<T> {
        self.rx.recv().await.ok()
    }

    /// Mark one previously dequeued item as fully processed
    pub fn acknowledge(&self) {
        let previous = self.unfinished.fetch_sub(1, Ordering::AcqRel);
        debug_assert!(previous > 0, "acknowledge without matching enqueue");
        if previous == 1 {
            self.drained.notify_waiters();
        }
    }

    /// Block until every enqueued item has been acknowledged
    pub async fn join(&self) {
        let notified = self.drained.notified();
        tokio::pin!(notified);
        loop {
            // Register interest before the check so a concurrent final
            // acknowledge cannot slip between the load and the await.
            notified.as_mut().enable();
            if self.unfinished.load(Ordering::Acquire) == 0 {
                return;
            }
            notified.as_mut().await;
            notified.set(self.drained.notified());
        }
    }

    /// Number of delivered-but-unacknowledged plus undelivered items
    pub fn unfinished(&self) -> usize {
        self.unfinished.load(Ordering::Acquire)
    }

    /// Number of items currently buffered in the channel
    pub fn len(&self) -> usize {
        self.rx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}
