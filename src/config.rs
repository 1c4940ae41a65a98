//! Configuration management
//!
//! Loads configuration from config.toml with support for:
//! - Server binding settings
//! - Marketplace rules (minimum reward, demo data)
//! - Advisory text service endpoint and credentials

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

const DEFAULT_CONFIG: &str = include_str!("../config.toml");

/// Main configuration structure matching config.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub marketplace: MarketplaceConfig,
    #[serde(default)]
    pub advisory: AdvisoryConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Marketplace rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketplaceConfig {
    /// Smallest reward a bounty can be created with
    pub min_reward: f64,
    /// Populate the store with the demo bounties and users on startup
    #[serde(default)]
    pub seed_demo_data: bool,
}

/// Advisory text service (hosted generative-text provider)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryConfig {
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
    /// API key; GEMINI_API_KEY / API_KEY env vars take precedence
    #[serde(default)]
    pub api_key: String,
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-3-flash-preview".to_string(),
            timeout_secs: 20,
            api_key: String::new(),
        }
    }
}

impl AdvisoryConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    /// Get the API key (env var takes precedence, None if neither is set)
    pub fn api_key(&self) -> Option<String> {
        for var in ["GEMINI_API_KEY", "API_KEY"] {
            if let Ok(key) = std::env::var(var) {
                if !key.is_empty() {
                    return Some(key);
                }
            }
        }
        if self.api_key.is_empty() {
            None
        } else {
            Some(self.api_key.clone())
        }
    }
}

impl Config {
    /// Load from DATABOUNTY_CONFIG, then config.toml, then the embedded defaults
    pub fn load() -> Result<Self> {
        let path =
            std::env::var("DATABOUNTY_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
        let mut config = Self::load_from(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from specific path
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if path.exists() {
            let content = std::fs::read_to_string(path).context("Failed to read config file")?;
            Self::parse(&content)
        } else {
            Self::parse(DEFAULT_CONFIG).context("Failed to parse default config")
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse config file")?;
        if !config.marketplace.min_reward.is_finite() || config.marketplace.min_reward <= 0.0 {
            anyhow::bail!(
                "marketplace.min_reward must be a positive number, got {}",
                config.marketplace.min_reward
            );
        }
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("DATABOUNTY_HOST") {
            if !host.is_empty() {
                self.server.host = host;
            }
        }
        if let Some(port) = std::env::var("DATABOUNTY_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
        {
            self.server.port = port;
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::parse(DEFAULT_CONFIG).unwrap_or_else(|_| Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            marketplace: MarketplaceConfig {
                min_reward: 10.0,
                seed_demo_data: true,
            },
            advisory: AdvisoryConfig::default(),
        })
    }
}
