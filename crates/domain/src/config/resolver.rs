use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Overrides applied on top of the system resolver configuration.
/// Unset `timeout_ms` and `attempts` keep the system defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Per-query timeout in milliseconds
    #[serde(default)]
    pub timeout_ms: Option<u64>,

    /// Number of attempts per query
    #[serde(default)]
    pub attempts: Option<usize>,

    /// Consult the hosts file before querying nameservers. Off when unset.
    #[serde(default)]
    pub use_hosts_file: Option<bool>,
}

impl ResolverConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    pub fn with_attempts(mut self, attempts: usize) -> Self {
        self.attempts = Some(attempts);
        self
    }

    pub fn with_use_hosts_file(mut self, use_hosts_file: bool) -> Self {
        self.use_hosts_file = Some(use_hosts_file);
        self
    }
}
