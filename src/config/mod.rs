pub mod cli;
pub mod toml_config;

pub use cli::CliConfig;
pub use toml_config::FileConfig;

use crate::core::Session;
use crate::utils::error::Result;
use crate::utils::validation::{validate_date, validate_minimum, validate_url, Validate};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_TICK_RATE_MS: u64 = 100;

/// Fully resolved runtime settings. Precedence per field: explicit CLI
/// flag, then the config file, then the built-in default.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub base_url: String,
    pub date: String,
    pub tick_rate: Duration,
    pub verbose: bool,
}

impl AppSettings {
    pub fn resolve(cli: CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Ok(Self::merge(cli, &file))
    }

    fn merge(cli: CliConfig, file: &FileConfig) -> Self {
        let base_url = cli
            .base_url
            .or_else(|| file.base_url().map(str::to_string))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let date = cli
            .date
            .or_else(|| file.date().map(str::to_string))
            .unwrap_or_else(Session::today);
        let tick_rate_ms = cli
            .tick_rate_ms
            .or_else(|| file.tick_rate_ms())
            .unwrap_or(DEFAULT_TICK_RATE_MS);

        Self {
            base_url,
            date,
            tick_rate: Duration::from_millis(tick_rate_ms),
            verbose: cli.verbose,
        }
    }
}

impl Validate for AppSettings {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_date("date", &self.date)?;
        validate_minimum("tick_rate_ms", self.tick_rate.as_millis() as u64, 10)?;
        Ok(())
    }
}
