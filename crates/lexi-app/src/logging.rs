use anyhow::anyhow;
use lexi_config::logging::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber; logs go to stderr, stdout belongs to the UI
pub fn init(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.with_target(false).try_init()
    };

    installed.map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
}
