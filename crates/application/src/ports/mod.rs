pub mod dns_resolver;
pub mod validator;

pub use dns_resolver::{DnsResolution, DnsResolver};
pub use validator::Validator;
