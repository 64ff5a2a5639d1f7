use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use randrev_common::config::{self, Config, Protocol};

#[derive(Parser, Debug)]
#[command(name = "randrevdns")]
#[command(about = "Bulk reverse DNS lookups spread across random resolvers.")]
pub struct CommandLine {
    /// Number of concurrent lookup workers
    #[arg(short, long, default_value_t = config::DEFAULT_THREADS, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub threads: usize,

    /// File with one resolver IPv4 address per line
    #[arg(short, long, default_value = config::DEFAULT_RESOLVER_LIST)]
    pub resolvers: PathBuf,

    /// File with one target IP address per line
    #[arg(short = 'T', long, default_value = config::DEFAULT_TARGET_LIST)]
    pub targets: PathBuf,

    /// Transport used to reach resolvers (udp or tcp)
    #[arg(short = 'P', long, default_value = "udp")]
    pub protocol: Protocol,

    /// Per-lookup timeout in seconds
    #[arg(short = 'w', long, default_value_t = config::DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Port resolvers listen on
    #[arg(short, long, default_value_t = config::DEFAULT_PORT)]
    pub port: u16,

    /// Append-only log file
    #[arg(short, long, default_value = config::DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Reject target lines without a '.' before starting
    #[arg(long)]
    pub strict_targets: bool,

    /// Increase console verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            threads: self.threads,
            resolver_list: self.resolvers.clone(),
            target_list: self.targets.clone(),
            protocol: self.protocol,
            timeout: Duration::from_secs(self.timeout),
            port: self.port,
            log_file: self.log_file.clone(),
            strict_targets: self.strict_targets,
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
