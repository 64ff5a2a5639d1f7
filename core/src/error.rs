use std::net::AddrParseError;
use std::time::Duration;

use thiserror::Error;

/// Why a single reverse lookup failed. Never fatal for the scan.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("target {target:?} is not an IP address: {source}")]
    InvalidTarget {
        target: String,
        #[source]
        source: AddrParseError,
    },

    #[error("resolver {resolver:?} is not an IP address: {source}")]
    InvalidEndpoint {
        resolver: String,
        #[source]
        source: AddrParseError,
    },

    #[error("lookup timed out after {0:?}")]
    Timeout(Duration),

    /// Anything the DNS client reports: refused connections, NXDOMAIN, empty
    /// answers, malformed responses.
    #[error("{0}")]
    Resolve(String),
}
