//! Logging setup.

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Installs the global `tracing` subscriber.
///
/// `log_level` accepts any `EnvFilter` directive (`info`,
/// `link_shortener=debug,tower_http=info`, ...). Invalid directives fall back
/// to `info`.
pub fn init(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    }
}
