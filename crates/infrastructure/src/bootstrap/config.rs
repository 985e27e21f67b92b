use dnsvet_domain::Config;
use tracing::info;

pub fn load_config(config_path: Option<&str>) -> anyhow::Result<Config> {
    let config = Config::load(config_path)?;
    config.validate()?;

    info!(
        config_file = config_path.unwrap_or("default"),
        locale = %config.locale,
        timeout_ms = ?config.resolver.timeout_ms,
        "Configuration loaded"
    );

    Ok(config)
}
