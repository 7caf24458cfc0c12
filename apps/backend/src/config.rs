//! Environment-driven configuration.

use std::{env, fmt::Display, str::FromStr};

use anyhow::Context;
use tracing::info;

/// Runtime settings for the service.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    pub seed_starter_cards: bool,
}

impl Config {
    /// Load settings from the environment (and `.env`, if present).
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            database_url: try_load("DATABASE_URL", "sqlite://app.db")?,
            host: try_load("HOST", "0.0.0.0")?,
            port: try_load("PORT", "3000")?,
            max_connections: try_load("DB_MAX_CONNECTIONS", "5")?,
            seed_starter_cards: try_load("SEED_STARTER_CARDS", "true")?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> anyhow::Result<T>
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse()
        .map_err(|e: T::Err| anyhow::anyhow!("{e}"))
        .with_context(|| format!("Invalid {key} value: {raw:?}"))
}
