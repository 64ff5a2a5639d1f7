use std::sync::Arc;
use std::time::Duration;

use randrev_common::config::{Config, Protocol};
use randrev_common::network::resolver::ResolverEndpoint;
use randrev_common::network::target::Target;
use tokio::time::timeout;
use tracing::{debug, error, info};

use crate::error::LookupError;
use crate::network::connector::{Connector, ResolverBinding};

/// Runs one reverse lookup against one chosen resolver.
pub struct LookupExecutor {
    connector: Arc<dyn Connector>,
    protocol: Protocol,
    port: u16,
    timeout: Duration,
}

impl LookupExecutor {
    pub fn new(connector: Arc<dyn Connector>, cfg: &Config) -> Self {
        Self {
            connector,
            protocol: cfg.protocol,
            port: cfg.port,
            timeout: cfg.timeout,
        }
    }

    /// Resolves `target` through `resolver` and logs the outcome.
    ///
    /// Errors are logged here and handed back so workers can count them.
    /// They are never retried.
    pub async fn execute(
        &self,
        target: &Target,
        resolver: &ResolverEndpoint,
    ) -> Result<Vec<String>, LookupError> {
        debug!(ip = %target, resolver = %resolver, "Resolving hostname with dialer");

        match self.lookup(target, resolver).await {
            Ok(hostnames) => {
                for hostname in &hostnames {
                    info!(ip = %target, hostname = %hostname, "result");
                }
                Ok(hostnames)
            }
            Err(e) => {
                error!(ip = %target, resolver = %resolver, "fail: {e}");
                Err(e)
            }
        }
    }

    async fn lookup(
        &self,
        target: &Target,
        resolver: &ResolverEndpoint,
    ) -> Result<Vec<String>, LookupError> {
        let addr = target.to_ip().map_err(|source| LookupError::InvalidTarget {
            target: target.to_string(),
            source,
        })?;
        let binding = self.bind(resolver)?;

        let client = self.connector.connect(&binding);
        timeout(self.timeout, client.reverse_lookup(addr))
            .await
            .map_err(|_elapsed| LookupError::Timeout(self.timeout))?
    }

    fn bind(&self, resolver: &ResolverEndpoint) -> Result<ResolverBinding, LookupError> {
        let server = resolver
            .socket_addr(self.port)
            .map_err(|source| LookupError::InvalidEndpoint {
                resolver: resolver.to_string(),
                source,
            })?;

        Ok(ResolverBinding {
            server,
            protocol: self.protocol,
            timeout: self.timeout,
        })
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
