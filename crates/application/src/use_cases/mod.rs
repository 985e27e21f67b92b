pub mod validate_domain;

pub use validate_domain::DomainValidator;
