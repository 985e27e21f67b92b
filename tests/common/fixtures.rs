use async_trait::async_trait;
use dnsvet_application::ports::{DnsResolution, DnsResolver};
use dnsvet_domain::DomainError;
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Common test domains
pub struct TestDomains;

impl TestDomains {
    pub fn example() -> &'static str {
        "example.com"
    }

    pub fn www_example() -> &'static str {
        "www.example.com"
    }

    pub fn rubygems() -> &'static str {
        "rubygems.org"
    }

    pub fn without_record() -> &'static str {
        "a.com"
    }

    pub fn single_label() -> &'static str {
        "notadomain"
    }
}

/// In-memory resolver that records every lookup.
pub struct CountingResolver {
    records: HashMap<&'static str, IpAddr>,
    calls: AtomicUsize,
    lookups: Mutex<Vec<String>>,
}

impl CountingResolver {
    pub fn new() -> Self {
        let records = [
            (TestDomains::example(), "93.184.215.14"),
            (TestDomains::www_example(), "93.184.215.14"),
            (TestDomains::rubygems(), "151.101.1.227"),
        ]
        .into_iter()
        .map(|(domain, ip)| (domain, ip.parse().unwrap()))
        .collect();

        Self {
            records,
            calls: AtomicUsize::new(0),
            lookups: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl DnsResolver for CountingResolver {
    async fn resolve(&self, domain: &str) -> Result<DnsResolution, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.lookups.lock().unwrap().push(domain.to_string());

        self.records
            .get(domain)
            .map(|ip| DnsResolution::new(vec![*ip]))
            .ok_or_else(|| DomainError::ResolutionFailed {
                domain: domain.to_string(),
                reason: "NXDOMAIN".to_string(),
            })
    }
}
