use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::adapters::DEFAULT_BASE_URL;
use crate::cli::Cli;

pub const DEFAULT_CONFIG_FILE: &str = "lexicon.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub service: ServiceSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Connection to the schema service
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceSettings {
    pub base_url: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` wins when set
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Create settings from CLI arguments (includes config file and CLI overrides)
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let mut settings = Self::from_file(&cli.config)?;

        // CLI > env vars > config file > defaults
        settings.apply_cli_overrides(cli);

        settings.validate().map_err(|errors| {
            anyhow::anyhow!("Configuration validation failed:\n{}", errors.join("\n"))
        })?;

        Ok(settings)
    }

    /// Defaults, then the file (optional), then `LEXICON_*` variables
    /// (`LEXICON_SERVICE__BASE_URL`, `LEXICON_LOGGING__LEVEL`, ...)
    pub fn from_file(path: &Path) -> Result<Self, anyhow::Error> {
        let s = Config::builder()
            .set_default("service.base_url", DEFAULT_BASE_URL)?
            .set_default("service.timeout_seconds", 30)?
            .set_default("logging.level", "info")?
            .add_source(File::from(path).required(false))
            .add_source(
                Environment::with_prefix("LEXICON")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(s.try_deserialize()?)
    }

    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(base_url) = &cli.base_url {
            self.service.base_url = base_url.clone();
        }
        if let Some(timeout) = cli.timeout {
            self.service.timeout_seconds = timeout;
        }
        if let Some(level) = &cli.log_level {
            self.logging.level = level.clone();
        }
    }

    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        let url = &self.service.base_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            errors.push(format!(
                "service.base_url must start with http:// or https://, got '{}'",
                url
            ));
        }
        if self.service.timeout_seconds == 0 {
            errors.push("service.timeout_seconds must be greater than 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.service.timeout_seconds)
    }
}
