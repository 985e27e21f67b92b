use dnsvet_domain::{DnsCheckOptions, DnsIssue, DomainError};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::ports::DnsResolver;

/// Classifies DNS-level problems with a domain that already passed the
/// format check.
///
/// At most two lookups per call, strictly in sequence: the domain itself,
/// then the `same_ip_as` reference. Nothing is cached between calls.
pub struct DnsIssueDetector {
    resolver: Arc<dyn DnsResolver>,
}

impl DnsIssueDetector {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    /// Any failure resolving `domain` is reported as
    /// [`DnsIssue::MissingDnsRecord`]. A reference domain that cannot be
    /// resolved is not a domain issue and comes back as
    /// [`DomainError::ReferenceResolutionFailed`].
    #[instrument(skip(self, options))]
    pub async fn detect_issues(
        &self,
        domain: &str,
        options: Option<&DnsCheckOptions>,
    ) -> Result<DnsIssue, DomainError> {
        let address = match self.primary_address(domain).await {
            Ok(address) => address,
            Err(e) => {
                debug!(domain = %domain, error = %e, "Domain has no DNS record");
                return Ok(DnsIssue::MissingDnsRecord);
            }
        };

        let Some(reference) = options.and_then(|o| o.same_ip_as.as_ref()) else {
            debug!(domain = %domain, address = %address, "Domain resolved");
            return Ok(DnsIssue::NoIssue);
        };

        let reference_domain = reference.resolve();
        let reference_address = self
            .primary_address(&reference_domain)
            .await
            .map_err(|e| {
                warn!(
                    domain = %domain,
                    reference = %reference_domain,
                    error = %e,
                    "Reference domain could not be resolved"
                );
                DomainError::ReferenceResolutionFailed {
                    domain: reference_domain.to_string(),
                    reason: e.to_string(),
                }
            })?;

        if address != reference_address {
            debug!(
                domain = %domain,
                address = %address,
                reference = %reference_domain,
                reference_address = %reference_address,
                "Domain does not resolve to the reference address"
            );
            return Ok(DnsIssue::IncorrectDnsRecord);
        }

        debug!(domain = %domain, reference = %reference_domain, address = %address, "Domain matches reference address");
        Ok(DnsIssue::NoIssue)
    }

    async fn primary_address(&self, domain: &str) -> Result<IpAddr, DomainError> {
        self.resolver
            .resolve(domain)
            .await?
            .primary()
            .ok_or_else(|| DomainError::NoAddress(domain.to_string()))
    }
}
