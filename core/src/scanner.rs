//! The reverse DNS **scan pipeline**.
//!
//! A single [`TargetSource`] streams targets into a minimally buffered
//! [`queue`], and a [`WorkerPool`] of fixed size pulls from it. For every
//! target a worker picks a resolver from the pool and hands both to the
//! [`LookupExecutor`], which pins the lookup to that resolver through a
//! [`Connector`](crate::network::connector::Connector).
//!
//! Results and failures only go to the log. The scan ends once the target list
//! is exhausted and every worker has returned.

use std::sync::Arc;
use std::time::{Duration, Instant};

use randrev_common::config::Config;
use randrev_common::network::resolver::ResolverPool;
use tracing::{error, info};

use crate::network::connector::Connector;

pub mod lookup;
pub mod queue;
pub mod source;
pub mod workers;

pub use lookup::LookupExecutor;
pub use source::TargetSource;
pub use workers::{WorkerPool, WorkerTally};

/// What a finished scan did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    /// Targets taken from the source.
    pub queued: usize,
    /// Targets processed by each worker, indexed by worker.
    pub per_worker: Vec<usize>,
    /// Lookups that ended in an error, across all workers.
    pub failed: usize,
    pub elapsed: Duration,
}

impl ScanReport {
    pub fn processed(&self) -> usize {
        self.per_worker.iter().sum()
    }
}

/// Runs a complete scan and returns once every worker has joined.
pub async fn perform_scan(
    cfg: &Config,
    resolvers: Arc<ResolverPool>,
    source: TargetSource,
    connector: Arc<dyn Connector>,
) -> ScanReport {
    info!(
        threads = cfg.threads,
        resolvers = resolvers.len(),
        protocol = %cfg.protocol,
        port = cfg.port,
        "Starting reverse lookups"
    );
    let start_time = Instant::now();

    let (tx, queue) = queue::channel();
    let producer = tokio::spawn(source.run(tx));

    let executor = Arc::new(LookupExecutor::new(connector, cfg));
    let tallies: Vec<WorkerTally> = WorkerPool::new(cfg.threads, resolvers, executor)
        .run(queue)
        .await;

    let queued = match producer.await {
        Ok(count) => count,
        Err(e) => {
            error!("Target producer terminated abnormally: {e}");
            0
        }
    };

    let report = ScanReport {
        queued,
        per_worker: tallies.iter().map(|t| t.processed).collect(),
        failed: tallies.iter().map(|t| t.failed).sum(),
        elapsed: start_time.elapsed(),
    };
    info!(
        processed = report.processed(),
        failed = report.failed,
        elapsed_secs = report.elapsed.as_secs_f64(),
        "All workers finished"
    );
    report
}
