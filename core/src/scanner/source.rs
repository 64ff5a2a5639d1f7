//! The single producer feeding targets into the work queue.

use std::path::{Path, PathBuf};

use randrev_common::error::LoadError;
use randrev_common::network::target::{self, Target};
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tokio::sync::mpsc::Sender;
use tracing::{debug, error, info};

type LineReader = Lines<Box<dyn AsyncBufRead + Send + Unpin>>;

pub enum TargetSource {
    /// Streams the target list line by line without validating it.
    Stream { path: PathBuf, lines: LineReader },
    /// Targets that were loaded and validated before the scan.
    Preloaded(Vec<Target>),
}

impl TargetSource {
    /// Opens the target list for streaming.
    ///
    /// Failing to open the file is reported here, before any worker starts.
    pub async fn open(path: &Path) -> Result<Self, LoadError> {
        let file = File::open(path).await.map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_reader(BufReader::new(file), path))
    }

    /// Loads and checks the whole target list up front, see [`target::load`].
    pub fn strict(path: &Path) -> Result<Self, LoadError> {
        Ok(Self::Preloaded(target::load(path)?))
    }

    pub fn from_reader<R>(reader: R, path: &Path) -> Self
    where
        R: AsyncBufRead + Send + Unpin + 'static,
    {
        let reader: Box<dyn AsyncBufRead + Send + Unpin> = Box::new(reader);
        Self::Stream {
            path: path.to_path_buf(),
            lines: reader.lines(),
        }
    }

    /// Sends every target to `tx` and returns how many were sent.
    ///
    /// `tx` is dropped on return, which closes the queue for the workers.
    pub async fn run(self, tx: Sender<Target>) -> usize {
        let mut sent: usize = 0;

        match self {
            TargetSource::Stream { path, mut lines } => loop {
                match lines.next_line().await {
                    Ok(Some(line)) => {
                        if tx.send(Target::new(&line)).await.is_err() {
                            break;
                        }
                        sent += 1;
                    }
                    Ok(None) => break,
                    Err(e) => {
                        error!("Failed reading targets from {}: {e}", path.display());
                        break;
                    }
                }
            },
            TargetSource::Preloaded(targets) => {
                for target in targets {
                    if tx.send(target).await.is_err() {
                        break;
                    }
                    sent += 1;
                }
            }
        }

        if tx.is_closed() {
            debug!("All workers stopped before the target list was exhausted");
        }
        info!(count = sent, "Done queueing targets");
        sent
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
