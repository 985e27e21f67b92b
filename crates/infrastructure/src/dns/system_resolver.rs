use async_trait::async_trait;
use dnsvet_application::ports::{DnsResolution, DnsResolver};
use dnsvet_domain::{DomainError, ResolverConfig};
use hickory_resolver::config::{ResolverConfig as UpstreamConfig, ResolverOpts};
use hickory_resolver::system_conf::read_system_conf;
use hickory_resolver::TokioAsyncResolver;
use std::net::IpAddr;
use tracing::{debug, info};

/// [`DnsResolver`] backed by hickory, seeded from the host's resolver
/// configuration (`/etc/resolv.conf` on unix).
///
/// Every input is queried as a name: A records first, AAAA only when the A
/// query yields nothing. IP-literal inputs are not short-circuited. The hosts
/// file is ignored unless `use_hosts_file` is set.
pub struct SystemDnsResolver {
    resolver: TokioAsyncResolver,
    opts: ResolverOpts,
}

impl SystemDnsResolver {
    pub fn from_system_conf(overrides: &ResolverConfig) -> Result<Self, DomainError> {
        let (config, opts) =
            read_system_conf().map_err(|e| DomainError::ResolverUnavailable(e.to_string()))?;

        info!(
            nameservers = config.name_servers().len(),
            "Loaded system resolver configuration"
        );

        Ok(Self::new(config, opts, overrides))
    }

    pub fn new(config: UpstreamConfig, mut opts: ResolverOpts, overrides: &ResolverConfig) -> Self {
        opts.use_hosts_file = overrides.use_hosts_file.unwrap_or(false);

        if let Some(timeout) = overrides.timeout() {
            opts.timeout = timeout;
        }
        if let Some(attempts) = overrides.attempts {
            opts.attempts = attempts;
        }

        debug!(
            timeout_ms = opts.timeout.as_millis() as u64,
            attempts = opts.attempts,
            use_hosts_file = opts.use_hosts_file,
            "Resolver options applied"
        );

        Self {
            resolver: TokioAsyncResolver::tokio(config, opts.clone()),
            opts,
        }
    }

    /// Options the underlying resolver was built with.
    pub fn options(&self) -> &ResolverOpts {
        &self.opts
    }

    async fn lookup_v4(&self, domain: &str) -> Result<Vec<IpAddr>, String> {
        self.resolver
            .ipv4_lookup(domain)
            .await
            .map(|lookup| lookup.iter().map(|a| IpAddr::V4(a.0)).collect())
            .map_err(|e| e.to_string())
    }

    async fn lookup_v6(&self, domain: &str) -> Result<Vec<IpAddr>, String> {
        self.resolver
            .ipv6_lookup(domain)
            .await
            .map(|lookup| lookup.iter().map(|aaaa| IpAddr::V6(aaaa.0)).collect())
            .map_err(|e| e.to_string())
    }
}

/// Folds per-record-type answers, in query order, into one resolution.
///
/// The first non-empty answer wins. If every query answered but none had
/// addresses the resolution is empty; if none answered, the failures are
/// reported together.
fn resolution_from(
    domain: &str,
    answers: Vec<Result<Vec<IpAddr>, String>>,
) -> Result<DnsResolution, DomainError> {
    let mut answered = false;
    let mut failures = Vec::new();

    for answer in answers {
        match answer {
            Ok(addresses) if !addresses.is_empty() => return Ok(DnsResolution::new(addresses)),
            Ok(_) => answered = true,
            Err(reason) => failures.push(reason),
        }
    }

    if answered || failures.is_empty() {
        return Ok(DnsResolution::new(Vec::new()));
    }

    Err(DomainError::ResolutionFailed {
        domain: domain.to_string(),
        reason: failures.join("; "),
    })
}

#[async_trait]
impl DnsResolver for SystemDnsResolver {
    async fn resolve(&self, domain: &str) -> Result<DnsResolution, DomainError> {
        debug!(domain = %domain, "Performing address lookup");

        let v4 = self.lookup_v4(domain).await;
        let answers = match v4 {
            Ok(ref addresses) if !addresses.is_empty() => vec![v4],
            _ => vec![v4, self.lookup_v6(domain).await],
        };

        let resolution = resolution_from(domain, answers)?;
        debug!(domain = %domain, count = resolution.addresses.len(), "Address lookup finished");

        Ok(resolution)
    }
}
