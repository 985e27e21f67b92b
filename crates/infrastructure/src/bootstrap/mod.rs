pub mod config;
pub mod logging;
pub mod registry;

pub use config::load_config;
pub use logging::init_logging;
pub use registry::{build_registry, build_registry_with_resolver};
