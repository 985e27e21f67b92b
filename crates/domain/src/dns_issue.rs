use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Outcome of a DNS consistency check. Computed fresh on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DnsIssue {
    NoIssue,
    /// The domain itself does not resolve.
    MissingDnsRecord,
    /// The domain resolves, but not to the reference domain's address.
    IncorrectDnsRecord,
}

impl DnsIssue {
    pub fn is_issue(self) -> bool {
        !matches!(self, DnsIssue::NoIssue)
    }

    /// Symbolic kind reported to the host, `None` for [`DnsIssue::NoIssue`].
    pub fn kind(self) -> Option<IssueKind> {
        match self {
            DnsIssue::NoIssue => None,
            DnsIssue::MissingDnsRecord => Some(IssueKind::MissingDnsRecord),
            DnsIssue::IncorrectDnsRecord => Some(IssueKind::IncorrectDnsRecord),
        }
    }
}

/// Symbolic error kinds a domain rule can attach to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    InvalidDomain,
    MissingDnsRecord,
    IncorrectDnsRecord,
}

impl IssueKind {
    pub const ALL: [IssueKind; 3] = [
        IssueKind::InvalidDomain,
        IssueKind::MissingDnsRecord,
        IssueKind::IncorrectDnsRecord,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::InvalidDomain => "invalid_domain",
            IssueKind::MissingDnsRecord => "missing_dns_record",
            IssueKind::IncorrectDnsRecord => "incorrect_dns_record",
        }
    }

    /// Hard-coded message used when nothing else provides one.
    pub fn default_message(&self) -> &'static str {
        match self {
            IssueKind::InvalidDomain => "is invalid",
            IssueKind::MissingDnsRecord | IssueKind::IncorrectDnsRecord => {
                "does not have a valid DNS record"
            }
        }
    }

    pub fn is_dns_issue(&self) -> bool {
        !matches!(self, IssueKind::InvalidDomain)
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IssueKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "invalid_domain" => Ok(IssueKind::InvalidDomain),
            "missing_dns_record" => Ok(IssueKind::MissingDnsRecord),
            "incorrect_dns_record" => Ok(IssueKind::IncorrectDnsRecord),
            _ => Err(format!("Unknown issue kind: {s}")),
        }
    }
}
