//! Resolver binding and the connectors that honour it.
//!
//! A [`Connector`] turns a [`ResolverBinding`] into a client whose every query
//! goes to exactly that server, whatever name servers the host is configured
//! with. The lookup executor only talks to these traits, so tests can swap in
//! their own connector.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use async_trait::async_trait;
use hickory_resolver::TokioResolver;
use hickory_resolver::config::{NameServerConfig, ResolveHosts, ResolverConfig, ResolverOpts};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::proto::xfer::Protocol as WireProtocol;
use randrev_common::config::Protocol;

use crate::error::LookupError;

/// The server a single lookup is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverBinding {
    pub server: SocketAddr,
    pub protocol: Protocol,
    pub timeout: Duration,
}

/// Establishes the transport used for one lookup.
pub trait Connector: Send + Sync {
    fn connect(&self, binding: &ResolverBinding) -> Box<dyn ReverseClient>;
}

/// A DNS client bound to one resolver.
#[async_trait]
pub trait ReverseClient: Send + Sync {
    /// Returns the PTR names of `addr`, in answer order.
    async fn reverse_lookup(&self, addr: IpAddr) -> Result<Vec<String>, LookupError>;
}

/// Connector backed by `hickory-resolver`.
///
/// Every call builds a fresh resolver with the bound server as its only name
/// server, a single attempt and no cache. Neither resolv.conf nor the hosts
/// file is consulted.
#[derive(Debug, Clone, Copy, Default)]
pub struct HickoryConnector;

impl Connector for HickoryConnector {
    fn connect(&self, binding: &ResolverBinding) -> Box<dyn ReverseClient> {
        let mut config = ResolverConfig::new();
        config.add_name_server(NameServerConfig::new(
            binding.server,
            wire_protocol(binding.protocol),
        ));

        let mut opts = ResolverOpts::default();
        opts.timeout = binding.timeout;
        opts.attempts = 1;
        opts.cache_size = 0;
        opts.use_hosts_file = ResolveHosts::Never;

        let resolver = TokioResolver::builder_with_config(config, TokioConnectionProvider::default())
            .with_options(opts)
            .build();

        Box::new(HickoryClient { resolver })
    }
}

struct HickoryClient {
    resolver: TokioResolver,
}

#[async_trait]
impl ReverseClient for HickoryClient {
    async fn reverse_lookup(&self, addr: IpAddr) -> Result<Vec<String>, LookupError> {
        let lookup = self
            .resolver
            .reverse_lookup(addr)
            .await
            .map_err(|e| LookupError::Resolve(e.to_string()))?;

        Ok(lookup.iter().map(|name| name.to_string()).collect())
    }
}

fn wire_protocol(protocol: Protocol) -> WireProtocol {
    match protocol {
        Protocol::Udp => WireProtocol::Udp,
        Protocol::Tcp => WireProtocol::Tcp,
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
