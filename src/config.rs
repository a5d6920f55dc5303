// Configuration module: everything the tool needs from the environment,
// collected into one struct at startup and passed explicitly from there.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Runtime configuration. `grafana_url` never carries a trailing slash;
/// request paths are appended verbatim.
#[derive(Debug, Clone)]
pub struct Config {
    pub grafana_url: String,
    pub grafana_token: String,
    pub dir_datasources: PathBuf,
    pub dir_folders: PathBuf,
    pub dir_dashboards: PathBuf,
    /// Disable TLS certificate verification (set from `--insecure`).
    pub insecure: bool,
}

impl Config {
    /// Build the configuration from `GRAFANA_URL`, `GRAFANA_TOKEN` and the
    /// optional `DIR_DATASOURCES`/`DIR_FOLDERS`/`DIR_DASHBOARDS` overrides.
    /// Both required variables must be set and non-empty.
    pub fn from_env(insecure: bool) -> Result<Self> {
        let grafana_url = require("GRAFANA_URL")?;
        let grafana_token = require("GRAFANA_TOKEN")?;
        Ok(Config {
            grafana_url: grafana_url.trim_end_matches('/').to_string(),
            grafana_token,
            dir_datasources: dir_from_env("DIR_DATASOURCES", "./datasources"),
            dir_folders: dir_from_env("DIR_FOLDERS", "./folders"),
            dir_dashboards: dir_from_env("DIR_DASHBOARDS", "./dashboards"),
            insecure,
        })
    }
}

fn require(name: &str) -> Result<String> {
    let value = std::env::var(name).with_context(|| format!("{} is not set", name))?;
    if value.is_empty() {
        anyhow::bail!("{} is set but empty", name);
    }
    Ok(value)
}

fn dir_from_env(name: &str, default: &str) -> PathBuf {
    std::env::var(name)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}
