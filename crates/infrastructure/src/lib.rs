//! dnsvet Infrastructure Layer
pub mod bootstrap;
pub mod dns;
