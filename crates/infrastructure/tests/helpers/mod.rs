#![allow(dead_code)]

use async_trait::async_trait;
use dnsvet_application::ports::{DnsResolution, DnsResolver};
use dnsvet_domain::DomainError;
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Fixed hosts table with a lookup counter.
pub struct StaticResolver {
    records: HashMap<String, IpAddr>,
    calls: AtomicUsize,
}

impl StaticResolver {
    pub fn new(records: &[(&str, &str)]) -> Self {
        Self {
            records: records
                .iter()
                .map(|(domain, ip)| (domain.to_string(), ip.parse().unwrap()))
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DnsResolver for StaticResolver {
    async fn resolve(&self, domain: &str) -> Result<DnsResolution, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.records
            .get(domain)
            .map(|ip| DnsResolution::new(vec![*ip]))
            .ok_or_else(|| DomainError::ResolutionFailed {
                domain: domain.to_string(),
                reason: "NXDOMAIN".to_string(),
            })
    }
}

/// Domain nobody should ever register.
pub const NOT_A_REAL_DOMAIN: &str =
    "zjnajkndsjkangunausgnasngiuansiugnaiusngansjkgnaskjnaksjdn.com";

/// Answers every lookup successfully but with no addresses.
pub struct EmptyAnswerResolver;

#[async_trait]
impl DnsResolver for EmptyAnswerResolver {
    async fn resolve(&self, _domain: &str) -> Result<DnsResolution, DomainError> {
        Ok(DnsResolution::new(Vec::new()))
    }
}
