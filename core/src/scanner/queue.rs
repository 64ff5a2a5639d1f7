use std::sync::Arc;

use randrev_common::network::target::Target;
use tokio::sync::{Mutex, mpsc};

/// One target in flight between the producer and the workers.
const QUEUE_CAPACITY: usize = 1;

/// Consumer side of the handoff channel, shared by every worker.
///
/// The queue closes when the producer drops its sender. Targets that were
/// already queued are still handed out; after that [`WorkQueue::next`] returns
/// `None` to every caller.
#[derive(Clone)]
pub struct WorkQueue {
    rx: Arc<Mutex<mpsc::Receiver<Target>>>,
}

impl WorkQueue {
    pub async fn next(&self) -> Option<Target> {
        self.rx.lock().await.recv().await
    }
}

pub fn channel() -> (mpsc::Sender<Target>, WorkQueue) {
    let (tx, rx) = mpsc::channel(QUEUE_CAPACITY);
    let queue = WorkQueue {
        rx: Arc::new(Mutex::new(rx)),
    };
    (tx, queue)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
