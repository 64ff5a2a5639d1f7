use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading the resolver or target lists.
///
/// All of these are fatal for a scan: the caller is expected to stop before
/// any lookup is issued.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid resolver on line {line_no} of {}: {line:?}", path.display())]
    InvalidResolver {
        path: PathBuf,
        line_no: usize,
        line: String,
    },

    #[error("invalid target on line {line_no} of {}: {line:?}", path.display())]
    InvalidTarget {
        path: PathBuf,
        line_no: usize,
        line: String,
    },

    #[error("no resolvers found in {}", path.display())]
    NoResolvers { path: PathBuf },
}
