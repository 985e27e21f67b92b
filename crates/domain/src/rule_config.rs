use serde::Deserialize;

use super::dns_issue::IssueKind;
use super::reference_domain::ReferenceDomain;

/// Options accepted by `verify_dns` when given as a table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DnsCheckOptions {
    /// Reference domain the candidate must share an address with.
    /// Absent means only "the domain resolves at all" is checked.
    #[serde(default)]
    pub same_ip_as: Option<ReferenceDomain>,

    /// Generic message for every DNS issue.
    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub missing_dns_record: Option<String>,

    #[serde(default)]
    pub incorrect_dns_record: Option<String>,
}

impl DnsCheckOptions {
    pub fn same_ip_as(reference: impl Into<ReferenceDomain>) -> Self {
        Self {
            same_ip_as: Some(reference.into()),
            ..Self::default()
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the override for one DNS issue kind. `InvalidDomain` is ignored.
    pub fn with_issue_message(mut self, kind: IssueKind, message: impl Into<String>) -> Self {
        match kind {
            IssueKind::MissingDnsRecord => self.missing_dns_record = Some(message.into()),
            IssueKind::IncorrectDnsRecord => self.incorrect_dns_record = Some(message.into()),
            IssueKind::InvalidDomain => {}
        }
        self
    }

    pub fn issue_message(&self, kind: IssueKind) -> Option<&str> {
        match kind {
            IssueKind::MissingDnsRecord => self.missing_dns_record.as_deref(),
            IssueKind::IncorrectDnsRecord => self.incorrect_dns_record.as_deref(),
            IssueKind::InvalidDomain => None,
        }
    }
}

/// `verify_dns` accepts either a flag or an options table.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum VerifyDns {
    Flag(bool),
    Options(DnsCheckOptions),
}

impl VerifyDns {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, VerifyDns::Flag(false))
    }

    /// Options for the DNS check, `None` when the check is disabled.
    /// `Flag(true)` yields default options.
    pub fn options(&self) -> Option<DnsCheckOptions> {
        match self {
            VerifyDns::Flag(false) => None,
            VerifyDns::Flag(true) => Some(DnsCheckOptions::default()),
            VerifyDns::Options(options) => Some(options.clone()),
        }
    }

    pub fn as_options(&self) -> Option<&DnsCheckOptions> {
        match self {
            VerifyDns::Options(options) => Some(options),
            VerifyDns::Flag(_) => None,
        }
    }
}

impl Default for VerifyDns {
    fn default() -> Self {
        VerifyDns::Flag(false)
    }
}

impl From<bool> for VerifyDns {
    fn from(enabled: bool) -> Self {
        VerifyDns::Flag(enabled)
    }
}

impl From<DnsCheckOptions> for VerifyDns {
    fn from(options: DnsCheckOptions) -> Self {
        VerifyDns::Options(options)
    }
}

/// Configuration of the domain rule for one field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DomainRuleConfig {
    #[serde(default)]
    pub allow_nil: bool,

    #[serde(default)]
    pub allow_blank: bool,

    /// Override for the `invalid_domain` message.
    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub verify_dns: VerifyDns,
}

impl DomainRuleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow_nil(mut self, allow: bool) -> Self {
        self.allow_nil = allow;
        self
    }

    pub fn allow_blank(mut self, allow: bool) -> Self {
        self.allow_blank = allow;
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn verify_dns(mut self, verify: impl Into<VerifyDns>) -> Self {
        self.verify_dns = verify.into();
        self
    }

    /// Per-issue override for `kind`, if one is configured.
    pub fn issue_override(&self, kind: IssueKind) -> Option<&str> {
        self.verify_dns
            .as_options()
            .and_then(|options| options.issue_message(kind))
    }

    /// Generic override for `kind`: `message` for format errors,
    /// `verify_dns.message` for DNS issues.
    pub fn generic_override(&self, kind: IssueKind) -> Option<&str> {
        if kind.is_dns_issue() {
            self.verify_dns
                .as_options()
                .and_then(|options| options.message.as_deref())
        } else {
            self.message.as_deref()
        }
    }
}
