use dnsvet_domain::LoggingConfig;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Installs a global fmt subscriber. `RUST_LOG` takes precedence over the
/// configured level. Returns false when a subscriber was already installed.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_lowercase()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.with_ansi(true).try_init()
    };

    match result {
        Ok(()) => {
            info!("Logging initialized at level: {}", config.level);
            true
        }
        Err(e) => {
            debug!(error = %e, "Logging already initialized");
            false
        }
    }
}
