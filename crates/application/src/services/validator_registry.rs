use dnsvet_domain::{DomainError, DomainRuleConfig, ValidationError};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::Validator;

/// Explicit name → validator map. Nothing registers itself.
pub struct ValidatorRegistry {
    validators: HashMap<&'static str, Arc<dyn Validator>>,
    default_locale: String,
}

impl ValidatorRegistry {
    pub fn new(default_locale: impl Into<String>) -> Self {
        Self {
            validators: HashMap::new(),
            default_locale: default_locale.into(),
        }
    }

    pub fn register(&mut self, validator: Arc<dyn Validator>) -> Result<(), DomainError> {
        let name = validator.name();
        if self.validators.contains_key(name) {
            return Err(DomainError::DuplicateValidator(name.to_string()));
        }

        debug!(validator = name, "Validator registered");
        self.validators.insert(name, validator);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Validator>> {
        self.validators.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.validators.contains_key(name)
    }

    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.validators.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Runs the named rule with the registry's default locale.
    pub async fn validate(
        &self,
        rule: &str,
        value: Option<&str>,
        config: &DomainRuleConfig,
    ) -> Result<Vec<ValidationError>, DomainError> {
        self.validate_with_locale(rule, value, config, &self.default_locale)
            .await
    }

    #[instrument(skip(self, config))]
    pub async fn validate_with_locale(
        &self,
        rule: &str,
        value: Option<&str>,
        config: &DomainRuleConfig,
        locale: &str,
    ) -> Result<Vec<ValidationError>, DomainError> {
        let validator = self
            .validators
            .get(rule)
            .ok_or_else(|| DomainError::UnknownValidator(rule.to_string()))?;

        validator.validate(value, config, locale).await
    }
}

/// Ordered rules attached to one field.
#[derive(Debug, Clone, Default)]
pub struct FieldRules {
    rules: Vec<(String, DomainRuleConfig)>,
}

impl FieldRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(mut self, rule: impl Into<String>, config: DomainRuleConfig) -> Self {
        self.rules.push((rule.into(), config));
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs every rule in order and collects all errors. Stops at the first
    /// fatal error.
    pub async fn validate(
        &self,
        registry: &ValidatorRegistry,
        value: Option<&str>,
    ) -> Result<Vec<ValidationError>, DomainError> {
        let mut errors = Vec::new();
        for (rule, config) in &self.rules {
            errors.extend(registry.validate(rule, value, config).await?);
        }
        Ok(errors)
    }
}
