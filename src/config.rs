//! Environment-driven configuration

use std::{env, fmt::Display, str::FromStr};

use anyhow::{Context, Result};
use tracing::info;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

const DEFAULT_DESTINATIONS: [&str; 6] = ["Rome", "Paris", "Barcelona", "Lisbon", "Istanbul", "Prague"];

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Offered in the calculator form, no effect on price
    pub destinations: Vec<String>,
    /// Empty allows any origin
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    /// Load from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let destinations = match lookup("TOUR_DESTINATIONS") {
            Some(raw) => split_list(&raw),
            None => {
                info!("TOUR_DESTINATIONS not set, using built-in list");
                DEFAULT_DESTINATIONS.iter().map(|d| d.to_string()).collect()
            }
        };

        Ok(Self {
            host: try_load(&lookup, "HOST", HOST.to_string())?,
            port: try_load(&lookup, "PORT", PORT)?,
            destinations,
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|raw| split_list(&raw))
                .unwrap_or_default(),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            destinations: DEFAULT_DESTINATIONS.iter().map(|d| d.to_string()).collect(),
            cors_allowed_origins: Vec::new(),
        }
    }
}

fn try_load<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Display,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid {key} value: {raw:?}")),
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
