//! Configuration loading for Sanket.
//! Reads sanket.toml from the current directory or path in SANKET_CONFIG env var.

use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub polling: PollingConfig,
    #[serde(default)]
    pub gate: GateConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url()     -> String { "http://localhost:8000".to_string() }
fn default_timeout_secs() -> u64    { 30 }

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollingConfig {
    /// Readiness poll cadence, seconds.
    #[serde(default = "default_status_interval")]
    pub status_interval_secs: u64,
    /// Notification refresh cadence, seconds.
    #[serde(default = "default_alerts_interval")]
    pub alerts_interval_secs: u64,
}

fn default_status_interval() -> u64 { 5 }
fn default_alerts_interval() -> u64 { 300 }

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            status_interval_secs: default_status_interval(),
            alerts_interval_secs: default_alerts_interval(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateConfig {
    /// Views that function without processed data and are never locked.
    #[serde(default = "default_open_paths")]
    pub open_paths: Vec<String>,
}

fn default_open_paths() -> Vec<String> {
    ["/", "/guide", "/ingestion", "/live", "/settings"]
        .iter()
        .map(|p| p.to_string())
        .collect()
}

impl Default for GateConfig {
    fn default() -> Self {
        Self { open_paths: default_open_paths() }
    }
}


impl Config {
    /// Load configuration from sanket.toml.
    /// Checks SANKET_CONFIG env var first, then current directory.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("SANKET_CONFIG")
            .unwrap_or_else(|_| "sanket.toml".to_string());

        if !Path::new(&path).exists() {
            anyhow::bail!(
                "Config file not found: {}\n\
                 Copy sanket.example.toml to sanket.toml and edit it.",
                path
            );
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
