//! Application configuration, loaded from `~/.dreamlog/config.toml`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Runtime configuration for the journal server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// SQLite database file.
    #[serde(default = "default_database")]
    pub database: PathBuf,

    /// Address the HTTP server binds to.
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,

    /// Entries per public page.
    #[serde(default = "default_page_size")]
    pub page_size: i64,

    /// Operator login name. Single shared credential, no accounts.
    pub username: String,

    /// Operator password, compared in plain text.
    pub password: String,

    /// Attribution line shown in every page footer; empty hides it.
    #[serde(default)]
    pub author: String,
}

fn default_database() -> PathBuf {
    dreamlog_dir().join("dreams.db")
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3030))
}

fn default_page_size() -> i64 {
    10
}

fn dreamlog_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".dreamlog")
}

impl AppConfig {
    /// Load config from ~/.dreamlog/config.toml
    ///
    /// Fails hard with actionable error if config doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load config from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!("Config not found at {:?}\n\nRun: dreamlog init", path);
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {:?}", path))?;

        let config: Self =
            toml::from_str(&content).context("Failed to parse config file (invalid TOML)")?;

        if config.page_size < 1 {
            anyhow::bail!("page_size must be at least 1 (got {})", config.page_size);
        }

        tracing::debug!(config = %path.display(), "config loaded");
        Ok(config)
    }

    /// Get config file path: ~/.dreamlog/config.toml
    pub fn config_path() -> PathBuf {
        dreamlog_dir().join("config.toml")
    }

    /// Starter config written by `dreamlog init`; the credentials are
    /// placeholders the operator is expected to edit.
    pub fn starter() -> Self {
        Self {
            database: default_database(),
            bind: default_bind(),
            page_size: default_page_size(),
            username: "admin".to_string(),
            password: "change-me".to_string(),
            author: String::new(),
        }
    }

    /// Save config to file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let toml_str =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(path, toml_str).context(format!("Failed to write config file: {:?}", path))?;

        Ok(())
    }
}
