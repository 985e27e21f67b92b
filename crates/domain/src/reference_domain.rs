use serde::{Deserialize, Deserializer};
use std::fmt;
use std::sync::Arc;

/// Domain a candidate is compared against under `same_ip_as`.
///
/// The deferred form lets the reference be computed at validation time,
/// e.g. from other fields of the record being validated.
#[derive(Clone)]
pub enum ReferenceDomain {
    Literal(Arc<str>),
    Deferred(Arc<dyn Fn() -> String + Send + Sync>),
}

impl ReferenceDomain {
    pub fn literal(domain: impl Into<Arc<str>>) -> Self {
        ReferenceDomain::Literal(domain.into())
    }

    pub fn deferred<F>(producer: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        ReferenceDomain::Deferred(Arc::new(producer))
    }

    /// Produces the concrete reference domain. The producer of a deferred
    /// reference runs once per call.
    pub fn resolve(&self) -> Arc<str> {
        match self {
            ReferenceDomain::Literal(domain) => Arc::clone(domain),
            ReferenceDomain::Deferred(producer) => Arc::from(producer().as_str()),
        }
    }
}

impl fmt::Debug for ReferenceDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceDomain::Literal(domain) => f.debug_tuple("Literal").field(domain).finish(),
            ReferenceDomain::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

impl From<&str> for ReferenceDomain {
    fn from(domain: &str) -> Self {
        ReferenceDomain::Literal(Arc::from(domain))
    }
}

impl From<String> for ReferenceDomain {
    fn from(domain: String) -> Self {
        ReferenceDomain::Literal(Arc::from(domain.as_str()))
    }
}

impl<'de> Deserialize<'de> for ReferenceDomain {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let domain = String::deserialize(deserializer)?;
        Ok(ReferenceDomain::from(domain))
    }
}
