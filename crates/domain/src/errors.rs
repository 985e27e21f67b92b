use thiserror::Error;

use super::config::ConfigError;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("DNS resolution failed for {domain}: {reason}")]
    ResolutionFailed { domain: String, reason: String },

    #[error("Reference domain {domain} could not be resolved: {reason}")]
    ReferenceResolutionFailed { domain: String, reason: String },

    #[error("No address returned for {0}")]
    NoAddress(String),

    #[error("DNS resolver unavailable: {0}")]
    ResolverUnavailable(String),

    #[error("Unknown validator: {0}")]
    UnknownValidator(String),

    #[error("Validator already registered: {0}")]
    DuplicateValidator(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
