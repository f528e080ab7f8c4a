use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub cors_origin: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("POS_PORT", "3000"),
            database_url: try_load("DATABASE_URL", "sqlite://pos.db?mode=rwc"),
            cors_origin: try_load("CORS_ORIGIN", "http://localhost:5173"),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
