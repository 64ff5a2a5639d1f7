#![cfg(test)]
use std::collections::HashSet;
use std::net::IpAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use randrev_core::error::LookupError;
use randrev_core::network::connector::{Connector, ResolverBinding, ReverseClient};

/// One lookup as seen by the connector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub binding: ResolverBinding,
    pub addr: IpAddr,
}

/// Answers every lookup locally and records it.
///
/// Addresses in `hang` never get an answer, addresses in `fail` get an error.
#[derive(Default)]
pub struct MockConnector {
    calls: Arc<Mutex<Vec<Call>>>,
    hang: Arc<HashSet<IpAddr>>,
    fail: Arc<HashSet<IpAddr>>,
}

impl MockConnector {
    pub fn hanging_on(addrs: &[IpAddr]) -> Self {
        Self {
            hang: Arc::new(addrs.iter().copied().collect()),
            ..Default::default()
        }
    }

    pub fn failing_on(addrs: &[IpAddr]) -> Self {
        Self {
            fail: Arc::new(addrs.iter().copied().collect()),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

impl Connector for MockConnector {
    fn connect(&self, binding: &ResolverBinding) -> Box<dyn ReverseClient> {
        Box::new(MockClient {
            binding: *binding,
            calls: self.calls.clone(),
            hang: self.hang.clone(),
            fail: self.fail.clone(),
        })
    }
}

struct MockClient {
    binding: ResolverBinding,
    calls: Arc<Mutex<Vec<Call>>>,
    hang: Arc<HashSet<IpAddr>>,
    fail: Arc<HashSet<IpAddr>>,
}

#[async_trait]
impl ReverseClient for MockClient {
    async fn reverse_lookup(&self, addr: IpAddr) -> Result<Vec<String>, LookupError> {
        self.calls.lock().unwrap().push(Call {
            binding: self.binding,
            addr,
        });

        if self.hang.contains(&addr) {
            std::future::pending::<()>().await;
        }
        if self.fail.contains(&addr) {
            return Err(LookupError::Resolve("NXDOMAIN".to_string()));
        }
        Ok(vec![format!("host-{addr}.example.")])
    }
}
