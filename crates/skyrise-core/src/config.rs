//! Configuration loader.
//!
//! Uses Figment to merge built-in defaults, `config.toml`, a
//! `config.<env>.toml` overlay selected by `RUST_ENV`, and `SKYRISE_*`
//! environment variables. Path values expand `~` and `${VAR}`.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub data: DataConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory scanned for `.json` client fixture files.
    pub clients_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// When true, a budget range query also applies its upper bound as
    /// a ceiling. Off by default: the stock behavior collapses a range
    /// to its lower bound only.
    pub strict_budget_range: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig { clients_dir: "./dev_data/clients".to_string() },
            search: SearchConfig { strict_budget_range: false },
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_for_env(None)
    }

    pub fn load_for_env(env: Option<&str>) -> anyhow::Result<Self> {
        let env_name = if let Some(env) = env {
            env.to_string()
        } else {
            env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string())
        };

        let mut figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file("config.toml"));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file("config.dev.toml")),
            "prod" | "production" => figment = figment.merge(Toml::file("config.prod.toml")),
            "test" | "testing" => figment = figment.merge(Toml::file("config.test.toml")),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("SKYRISE_"));

        let config: Config = figment
            .extract()
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.data.clients_dir.trim().is_empty() {
            return Err(Error::InvalidConfig("data.clients_dir is empty".to_string()));
        }
        Ok(())
    }
}

impl DataConfig {
    /// Expand `~` and environment variables in `clients_dir`.
    pub fn clients_path(&self) -> PathBuf {
        let with_env = shellexpand::env(&self.clients_dir)
            .unwrap_or(Cow::Borrowed(self.clients_dir.as_str()));
        PathBuf::from(shellexpand::tilde(with_env.as_ref()).as_ref())
    }
}
