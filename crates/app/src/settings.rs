//! Handles settings for the application.
//!
//! Sources, lowest priority first:
//! - the TOML file given with `--config` (default `config/settings.toml`,
//!   optional),
//! - `LEDGERBOT__<SECTION>__<KEY>` environment variables,
//! - `API_KEY`, which overrides `telegram.token`.
use clap::Parser;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "config/settings";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct App {
    pub level: String,
    pub max_restarts: u32,
    pub restart_backoff_secs: u64,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            max_restarts: 5,
            restart_backoff_secs: 1,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Telegram {
    pub token: String,
    #[serde(default)]
    pub allowed_users: Vec<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Ledger {
    pub path: String,
    pub timezone: String,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            path: "expenses_data.json".to_string(),
            timezone: "UTC".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub app: App,
    pub telegram: Telegram,
    #[serde(default)]
    pub ledger: Ledger,
}

#[derive(Debug, Parser)]
#[command(name = "ledgerbot", about = "Expense tracking Telegram bot")]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long, env = "LEDGERBOT_CONFIG")]
    config: Option<String>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let args = Args::parse();
        let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
        Self::from_sources(config_path, std::env::var("API_KEY").ok())
    }

    fn from_sources(config_path: &str, api_key: Option<String>) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(config_path).required(false))
            .add_source(
                Environment::with_prefix("LEDGERBOT")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .set_override_option("telegram.token", api_key)?
            .build()?;

        settings.try_deserialize()
    }
}
