//! dnsvet Domain Layer
pub mod config;
pub mod dns_issue;
pub mod domain_name;
pub mod errors;
pub mod reference_domain;
pub mod rule_config;
pub mod validation_error;

pub use config::{Config, ConfigError, LoggingConfig, MessageCatalog, ResolverConfig};
pub use dns_issue::{DnsIssue, IssueKind};
pub use domain_name::{is_valid_domain, MAX_DOMAIN_LENGTH, MAX_LABEL_LENGTH};
pub use errors::DomainError;
pub use reference_domain::ReferenceDomain;
pub use rule_config::{DnsCheckOptions, DomainRuleConfig, VerifyDns};
pub use validation_error::ValidationError;
