use async_trait::async_trait;
use dnsvet_domain::{DomainError, DomainRuleConfig, ValidationError};

/// A field validation rule pluggable into a [`ValidatorRegistry`].
///
/// An empty error list means the value is valid. `Err` is reserved for
/// failures that must abort the whole validation pass.
///
/// [`ValidatorRegistry`]: crate::services::ValidatorRegistry
#[async_trait]
pub trait Validator: Send + Sync {
    /// Name the rule is registered under.
    fn name(&self) -> &'static str;

    async fn validate(
        &self,
        value: Option<&str>,
        config: &DomainRuleConfig,
        locale: &str,
    ) -> Result<Vec<ValidationError>, DomainError>;
}
