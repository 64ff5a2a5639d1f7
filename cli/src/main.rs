mod commands;
mod terminal;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use commands::CommandLine;
use randrev_common::config::Config;
use randrev_common::network::resolver;
use randrev_core::network::connector::{Connector, HickoryConnector};
use randrev_core::scanner::{self, ScanReport, TargetSource};
use terminal::logging;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let commands = CommandLine::parse_args();
    let cfg: Config = commands.to_config();

    if let Err(e) = logging::init_logging(&cfg.log_file, commands.verbose) {
        eprintln!("{e:#}");
        return ExitCode::FAILURE;
    }

    match run(&cfg, Arc::new(HickoryConnector)).await {
        Ok(_report) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Loads both lists, then scans through `connector`.
///
/// Every error returned here is fatal and happens before the first lookup.
/// Failed lookups are not errors; they only show up in the report.
async fn run(cfg: &Config, connector: Arc<dyn Connector>) -> anyhow::Result<ScanReport> {
    let resolvers = resolver::load(&cfg.resolver_list).context("loading resolvers")?;

    let source = if cfg.strict_targets {
        TargetSource::strict(&cfg.target_list)
    } else {
        TargetSource::open(&cfg.target_list).await
    }
    .context("loading targets")?;

    Ok(scanner::perform_scan(cfg, Arc::new(resolvers), source, connector).await)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
