use dnsvet_domain::{DomainRuleConfig, IssueKind, MessageCatalog};

/// One step of the message lookup chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageSource {
    /// `verify_dns.missing_dns_record` / `verify_dns.incorrect_dns_record`
    IssueOverride,
    /// `message` for format errors, `verify_dns.message` for DNS issues
    GenericOverride,
    /// Catalog entry for the active locale
    LocalizedCatalog,
    /// Hard-coded message for the issue kind
    BuiltinDefault,
}

impl MessageSource {
    pub const DEFAULT_CHAIN: [MessageSource; 4] = [
        MessageSource::IssueOverride,
        MessageSource::GenericOverride,
        MessageSource::LocalizedCatalog,
        MessageSource::BuiltinDefault,
    ];

    pub fn lookup(
        &self,
        kind: IssueKind,
        config: &DomainRuleConfig,
        locale: &str,
        catalog: &MessageCatalog,
    ) -> Option<String> {
        match self {
            MessageSource::IssueOverride => config.issue_override(kind).map(str::to_string),
            MessageSource::GenericOverride => config.generic_override(kind).map(str::to_string),
            MessageSource::LocalizedCatalog => catalog.lookup(locale, kind).map(str::to_string),
            MessageSource::BuiltinDefault => Some(kind.default_message().to_string()),
        }
    }
}

/// Resolves the user-facing message for an issue by walking an ordered
/// chain of sources; the first one that yields a message wins.
#[derive(Debug, Clone)]
pub struct MessageResolver {
    catalog: MessageCatalog,
    chain: Vec<MessageSource>,
}

impl MessageResolver {
    pub fn new(catalog: MessageCatalog) -> Self {
        Self::with_chain(catalog, MessageSource::DEFAULT_CHAIN.to_vec())
    }

    pub fn with_chain(catalog: MessageCatalog, chain: Vec<MessageSource>) -> Self {
        Self { catalog, chain }
    }

    pub fn chain(&self) -> &[MessageSource] {
        &self.chain
    }

    /// Always returns a message: if no source in the chain yields one, the
    /// built-in default for `kind` is used.
    pub fn resolve(&self, kind: IssueKind, config: &DomainRuleConfig, locale: &str) -> String {
        self.chain
            .iter()
            .find_map(|source| source.lookup(kind, config, locale, &self.catalog))
            .unwrap_or_else(|| kind.default_message().to_string())
    }
}

impl Default for MessageResolver {
    fn default() -> Self {
        Self::new(MessageCatalog::default())
    }
}
