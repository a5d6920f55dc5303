// Logging setup: a plain fmt subscriber filtered by the LOG_LEVEL
// environment variable (default "info").

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. `LOG_LEVEL` accepts any
/// env-filter directive ("debug", "warn", "grafana_backup_cli=trace", ...).
pub fn init() {
    let filter = EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
