use async_trait::async_trait;
use dnsvet_domain::DomainError;
use std::net::IpAddr;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct DnsResolution {
    pub addresses: Arc<Vec<IpAddr>>,
}

impl DnsResolution {
    pub fn new(addresses: Vec<IpAddr>) -> Self {
        Self {
            addresses: Arc::new(addresses),
        }
    }

    /// First address returned by the resolver.
    pub fn primary(&self) -> Option<IpAddr> {
        self.addresses.first().copied()
    }
}

/// Address resolution collaborator (A-record or equivalent lookup).
///
/// Retries and timeouts belong to the implementation; callers only see the
/// final result or a `DomainError`.
#[async_trait]
pub trait DnsResolver: Send + Sync {
    async fn resolve(&self, domain: &str) -> Result<DnsResolution, DomainError>;
}
