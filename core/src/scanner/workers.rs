use std::sync::Arc;

use randrev_common::network::resolver::ResolverPool;
use tokio::task::JoinHandle;
use tracing::{debug, error};

use super::lookup::LookupExecutor;
use super::queue::WorkQueue;

/// What a single worker did before the queue closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerTally {
    pub processed: usize,
    pub failed: usize,
}

/// A fixed number of workers draining one [`WorkQueue`].
pub struct WorkerPool {
    size: usize,
    resolvers: Arc<ResolverPool>,
    executor: Arc<LookupExecutor>,
}

impl WorkerPool {
    pub fn new(size: usize, resolvers: Arc<ResolverPool>, executor: Arc<LookupExecutor>) -> Self {
        Self {
            size,
            resolvers,
            executor,
        }
    }

    /// Spawns every worker and waits until all of them have seen the queue
    /// close. Returns one tally per worker.
    pub async fn run(self, queue: WorkQueue) -> Vec<WorkerTally> {
        let handles: Vec<JoinHandle<WorkerTally>> = (0..self.size)
            .map(|id| {
                let queue = queue.clone();
                let resolvers = self.resolvers.clone();
                let executor = self.executor.clone();
                tokio::spawn(work(id, queue, resolvers, executor))
            })
            .collect();
        drop(queue);

        let mut tallies = Vec::with_capacity(handles.len());
        for (id, handle) in handles.into_iter().enumerate() {
            match handle.await {
                Ok(tally) => tallies.push(tally),
                Err(e) => {
                    error!("Worker {id} terminated abnormally: {e}");
                    tallies.push(WorkerTally::default());
                }
            }
        }
        tallies
    }
}

/// Pulls targets until the queue is closed and drained.
///
/// Each target gets its own resolver, picked right before its lookup.
async fn work(
    id: usize,
    queue: WorkQueue,
    resolvers: Arc<ResolverPool>,
    executor: Arc<LookupExecutor>,
) -> WorkerTally {
    let mut tally = WorkerTally::default();

    while let Some(target) = queue.next().await {
        let resolver = resolvers.choose();
        if executor.execute(&target, resolver).await.is_err() {
            tally.failed += 1;
        }
        tally.processed += 1;
    }

    debug!(
        "Worker {id} finished after {} lookups ({} failed)",
        tally.processed, tally.failed
    );
    tally
}
