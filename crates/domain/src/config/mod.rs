//! Configuration module for dnsvet
//!
//! - `root`: top-level configuration and file loading
//! - `resolver`: DNS resolver overrides
//! - `logging`: logging settings
//! - `messages`: localized message catalog
//! - `errors`: configuration errors

pub mod errors;
pub mod logging;
pub mod messages;
pub mod resolver;
pub mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use messages::MessageCatalog;
pub use resolver::ResolverConfig;
pub use root::Config;
