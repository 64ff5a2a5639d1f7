//! # Resolver Pool
//!
//! Loads the list of DNS servers that lookups are spread across.
//!
//! The list is a plain text file with one IPv4 address per line. Validation is
//! deliberately coarse: a line is accepted when it has exactly three dots. Octet
//! ranges are not checked here, so a bad address only surfaces when a lookup is
//! bound to it.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::path::Path;

use tracing::{debug, info};

use crate::error::LoadError;
use crate::select;

/// A single resolver address, as read from the resolver list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolverEndpoint(String);

impl ResolverEndpoint {
    /// Accepts `line` when it looks like an IPv4 literal (exactly three dots).
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.matches('.').count() == 3 {
            Some(Self(line.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Socket address of this resolver on `port`.
    pub fn socket_addr(&self, port: u16) -> Result<SocketAddr, AddrParseError> {
        let ip: IpAddr = self.0.parse()?;
        Ok(SocketAddr::new(ip, port))
    }
}

impl fmt::Display for ResolverEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered, non-empty and immutable set of resolvers.
#[derive(Debug, Clone)]
pub struct ResolverPool {
    endpoints: Vec<ResolverEndpoint>,
}

impl ResolverPool {
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    /// Always false for a loaded pool.
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    pub fn endpoints(&self) -> &[ResolverEndpoint] {
        &self.endpoints
    }

    /// Picks a resolver for one lookup.
    pub fn choose(&self) -> &ResolverEndpoint {
        select::pick(&self.endpoints)
    }
}

/// Loads the resolver list at `path`, stopping at the first invalid line.
pub fn load(path: &Path) -> Result<ResolverPool, LoadError> {
    info!("Loading IP addresses from {}", path.display());

    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let pool = from_reader(BufReader::new(file), path)?;
    info!(count = pool.len(), "Done loading resolvers");
    Ok(pool)
}

/// Same as [`load`] for an already opened reader. `path` is only used in
/// errors and log lines.
pub fn from_reader<R: BufRead>(reader: R, path: &Path) -> Result<ResolverPool, LoadError> {
    let mut endpoints: Vec<ResolverEndpoint> = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        match ResolverEndpoint::parse(&line) {
            Some(endpoint) => {
                debug!("load from {}: {endpoint}", path.display());
                endpoints.push(endpoint);
            }
            None => {
                debug!("invalid: {}", line.trim());
                return Err(LoadError::InvalidResolver {
                    path: path.to_path_buf(),
                    line_no: idx + 1,
                    line: line.trim().to_string(),
                });
            }
        }
    }

    if endpoints.is_empty() {
        return Err(LoadError::NoResolvers {
            path: path.to_path_buf(),
        });
    }

    Ok(ResolverPool { endpoints })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
