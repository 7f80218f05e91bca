use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::ui::counter::{DEFAULT_DURATION, DEFAULT_TICK};
use crate::ui::theme::Theme;

/// Application configuration loaded from environment variables.
/// Every key has a default; malformed values abort startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub default_theme: Theme,
    pub counter_duration_ms: u64,
    pub counter_tick_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            default_theme: Theme::Dark,
            counter_duration_ms: DEFAULT_DURATION.as_millis() as u64,
            counter_tick_ms: DEFAULT_TICK.as_millis() as u64,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        let config = Config {
            port: env_or("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            default_theme: env_or("DEFAULT_THEME", defaults.default_theme)?,
            counter_duration_ms: env_or("COUNTER_DURATION_MS", defaults.counter_duration_ms)?,
            counter_tick_ms: env_or("COUNTER_TICK_MS", defaults.counter_tick_ms)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.counter_tick_ms == 0 {
            bail!("COUNTER_TICK_MS must be greater than zero");
        }
        Ok(())
    }

    pub fn counter_duration(&self) -> Duration {
        Duration::from_millis(self.counter_duration_ms)
    }

    pub fn counter_tick(&self) -> Duration {
        Duration::from_millis(self.counter_tick_ms)
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}
