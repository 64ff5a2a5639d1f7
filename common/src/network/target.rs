//! # Lookup Target Model
//!
//! A target is one line of the target list: normally an IP address whose PTR
//! records should be resolved. Lines are not validated when streamed, so a
//! malformed target only fails its own lookup.
//!
//! [`load`] is the strict alternative, reading the whole list up front and
//! rejecting lines that cannot be an address at all.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::net::{AddrParseError, IpAddr};
use std::path::Path;

use tracing::{debug, info};

use crate::error::LoadError;

/// Address whose hostnames are looked up.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Target(String);

impl Target {
    /// Wraps a raw line, trimming surrounding whitespace.
    pub fn new(line: &str) -> Self {
        Self(line.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_ip(&self) -> Result<IpAddr, AddrParseError> {
        self.0.parse()
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Target {
    fn from(line: &str) -> Self {
        Self::new(line)
    }
}

impl From<String> for Target {
    fn from(line: String) -> Self {
        Self::new(&line)
    }
}

/// Reads every target in `path`, failing on the first line without a `.`.
pub fn load(path: &Path) -> Result<Vec<Target>, LoadError> {
    info!("Loading target addresses from {}", path.display());

    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let targets = from_reader(BufReader::new(file), path)?;
    info!(count = targets.len(), "Done loading targets");
    Ok(targets)
}

pub fn from_reader<R: BufRead>(reader: R, path: &Path) -> Result<Vec<Target>, LoadError> {
    let mut targets: Vec<Target> = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let target = Target::new(&line);

        if !target.as_str().contains('.') {
            debug!("invalid: {target}");
            return Err(LoadError::InvalidTarget {
                path: path.to_path_buf(),
                line_no: idx + 1,
                line: target.0,
            });
        }

        debug!("load from {}: {target}", path.display());
        targets.push(target);
    }

    Ok(targets)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
