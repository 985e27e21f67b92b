pub mod dns_issue_detector;
pub mod message_resolver;
pub mod validator_registry;

pub use dns_issue_detector::DnsIssueDetector;
pub use message_resolver::{MessageResolver, MessageSource};
pub use validator_registry::{FieldRules, ValidatorRegistry};
