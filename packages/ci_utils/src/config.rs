use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::time::Duration;
use url::Url;

use crate::Waiter;

/// Runner configuration, read from TOML and then overridden from the
/// environment (`DASHBOARD_URL`, `WEBDRIVER_URL`, `DASHBOARD_USER`,
/// `DASHBOARD_PASSWORD`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct E2eConfig {
    pub base_url: String,
    pub webdriver_url: String,
    pub username: String,
    pub password: String,
    pub headless: bool,
    pub command_timeout_ms: u64,
    pub retry_interval_ms: u64,
    pub drain_timeout_secs: u64,
    pub screenshot_dir: Option<PathBuf>,
}

impl Default for E2eConfig {
    fn default() -> Self {
        Self {
            base_url: "https://localhost:8443/".to_string(),
            webdriver_url: "http://localhost:4444".to_string(),
            username: "admin".to_string(),
            password: "admin".to_string(),
            headless: true,
            command_timeout_ms: 4000,
            retry_interval_ms: 250,
            drain_timeout_secs: 120,
            screenshot_dir: None,
        }
    }
}

impl E2eConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse e2e config TOML")
    }

    /// Load `path` if given (defaults otherwise), then apply env overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?;
                log::info!("📄 Loaded config from {}", path.display());
                Self::from_toml_str(&content)?
            }
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup (`std::env::var` in practice).
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup("DASHBOARD_URL") {
            self.base_url = value;
        }
        if let Some(value) = lookup("WEBDRIVER_URL") {
            self.webdriver_url = value;
        }
        if let Some(value) = lookup("DASHBOARD_USER") {
            self.username = value;
        }
        if let Some(value) = lookup("DASHBOARD_PASSWORD") {
            self.password = value;
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.base_url()?;
        Url::parse(&self.webdriver_url)
            .map_err(|err| anyhow!("Invalid webdriver_url {:?}: {err}", self.webdriver_url))?;
        if self.retry_interval_ms == 0 {
            return Err(anyhow!("retry_interval_ms must be greater than zero"));
        }
        Ok(())
    }

    pub fn base_url(&self) -> Result<Url> {
        Url::parse(&self.base_url)
            .map_err(|err| anyhow!("Invalid base_url {:?}: {err}", self.base_url))
    }

    /// Polling policy for ordinary assertions.
    pub fn waiter(&self) -> Waiter {
        Waiter::new(
            Duration::from_millis(self.command_timeout_ms),
            Duration::from_millis(self.retry_interval_ms),
        )
    }

    pub fn drain_timeout(&self) -> Duration {
        Duration::from_secs(self.drain_timeout_secs)
    }
}
