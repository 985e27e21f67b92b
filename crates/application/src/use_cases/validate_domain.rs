use async_trait::async_trait;
use dnsvet_domain::{is_valid_domain, DomainError, DomainRuleConfig, IssueKind, ValidationError};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::{DnsResolver, Validator};
use crate::services::{DnsIssueDetector, MessageResolver};

/// The `domain` rule: format check, then the optional DNS check.
///
/// `allow_blank` also admits an absent value. The DNS check never runs for a
/// value that failed the format check.
pub struct DomainValidator {
    detector: DnsIssueDetector,
    messages: Arc<MessageResolver>,
}

impl DomainValidator {
    pub const NAME: &'static str = "domain";

    pub fn new(resolver: Arc<dyn DnsResolver>, messages: Arc<MessageResolver>) -> Self {
        Self {
            detector: DnsIssueDetector::new(resolver),
            messages,
        }
    }

    fn error(&self, kind: IssueKind, config: &DomainRuleConfig, locale: &str) -> ValidationError {
        ValidationError::new(kind, self.messages.resolve(kind, config, locale))
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[async_trait]
impl Validator for DomainValidator {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    #[instrument(skip(self, config))]
    async fn validate(
        &self,
        value: Option<&str>,
        config: &DomainRuleConfig,
        locale: &str,
    ) -> Result<Vec<ValidationError>, DomainError> {
        match value {
            None if config.allow_nil || config.allow_blank => return Ok(Vec::new()),
            Some(v) if config.allow_blank && is_blank(v) => return Ok(Vec::new()),
            _ => {}
        }

        if !is_valid_domain(value) {
            debug!("Domain format rejected");
            return Ok(vec![self.error(IssueKind::InvalidDomain, config, locale)]);
        }

        let (Some(domain), Some(options)) = (value, config.verify_dns.options()) else {
            return Ok(Vec::new());
        };

        let issue = self.detector.detect_issues(domain, Some(&options)).await?;
        Ok(issue
            .kind()
            .map(|kind| vec![self.error(kind, config, locale)])
            .unwrap_or_default())
    }
}
