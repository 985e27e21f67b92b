use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::dns_issue::IssueKind;

/// Localized messages keyed by locale, then by issue kind.
///
/// ```toml
/// [messages.en]
/// invalid_domain = "is not a domain"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct MessageCatalog {
    locales: BTreeMap<String, BTreeMap<String, String>>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        locale: impl Into<String>,
        kind: IssueKind,
        message: impl Into<String>,
    ) -> Option<String> {
        self.locales
            .entry(locale.into())
            .or_default()
            .insert(kind.as_str().to_string(), message.into())
    }

    pub fn with_message(
        mut self,
        locale: impl Into<String>,
        kind: IssueKind,
        message: impl Into<String>,
    ) -> Self {
        self.insert(locale, kind, message);
        self
    }

    pub fn lookup(&self, locale: &str, kind: IssueKind) -> Option<&str> {
        self.locales
            .get(locale)
            .and_then(|messages| messages.get(kind.as_str()))
            .map(String::as_str)
    }

    /// Keys that do not name an issue kind, as `(locale, key)` pairs.
    pub fn unknown_keys(&self) -> Vec<(&str, &str)> {
        self.locales
            .iter()
            .flat_map(|(locale, messages)| {
                messages
                    .keys()
                    .filter(|key| key.parse::<IssueKind>().is_err())
                    .map(move |key| (locale.as_str(), key.as_str()))
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.values().all(BTreeMap::is_empty)
    }
}
