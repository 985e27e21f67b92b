use dnsvet_application::ports::DnsResolver;
use dnsvet_application::services::{MessageResolver, ValidatorRegistry};
use dnsvet_application::use_cases::DomainValidator;
use dnsvet_domain::Config;
use std::sync::Arc;
use tracing::info;

use crate::dns::SystemDnsResolver;

/// Wires the `domain` rule against the system resolver.
pub fn build_registry(config: &Config) -> anyhow::Result<ValidatorRegistry> {
    let resolver = SystemDnsResolver::from_system_conf(&config.resolver)?;
    build_registry_with_resolver(config, Arc::new(resolver))
}

pub fn build_registry_with_resolver(
    config: &Config,
    resolver: Arc<dyn DnsResolver>,
) -> anyhow::Result<ValidatorRegistry> {
    config.validate()?;

    let messages = Arc::new(MessageResolver::new(config.messages.clone()));
    let mut registry = ValidatorRegistry::new(config.locale.clone());
    registry.register(Arc::new(DomainValidator::new(resolver, messages)))?;

    info!(
        validators = ?registry.names(),
        locale = %config.locale,
        "Validator registry ready"
    );

    Ok(registry)
}
