use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_THREADS: usize = 8;
pub const DEFAULT_RESOLVER_LIST: &str = "./dnsResolvers.txt";
pub const DEFAULT_TARGET_LIST: &str = "targets.txt";
pub const DEFAULT_LOG_FILE: &str = "./randrevdns.log";
pub const DEFAULT_TIMEOUT_SECS: u64 = 3;
pub const DEFAULT_PORT: u16 = 53;

/// Runtime settings, built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of concurrent lookup workers.
    pub threads: usize,
    pub resolver_list: PathBuf,
    pub target_list: PathBuf,
    /// Transport used to reach the chosen resolver.
    pub protocol: Protocol,
    /// Upper bound for a single lookup, connection included.
    pub timeout: Duration,
    /// Port the resolvers listen on.
    pub port: u16,
    pub log_file: PathBuf,
    /// Rejects target lines without a `.` before the scan starts.
    ///
    /// Off by default, in which case target lines are forwarded untouched.
    pub strict_targets: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threads: DEFAULT_THREADS,
            resolver_list: PathBuf::from(DEFAULT_RESOLVER_LIST),
            target_list: PathBuf::from(DEFAULT_TARGET_LIST),
            protocol: Protocol::Udp,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            port: DEFAULT_PORT,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            strict_targets: false,
        }
    }
}

/// Transport protocol spoken to a resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Protocol {
    #[default]
    Udp,
    Tcp,
}

impl FromStr for Protocol {
    type Err = String;

    /// Parses "udp" or "tcp" (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "udp" => Ok(Protocol::Udp),
            "tcp" => Ok(Protocol::Tcp),
            _ => Err(format!("unsupported protocol: {s} (expected udp or tcp)")),
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Udp => f.write_str("udp"),
            Protocol::Tcp => f.write_str("tcp"),
        }
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
