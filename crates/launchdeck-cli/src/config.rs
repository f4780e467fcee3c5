//! Layered settings
//!
//! Sources, later ones winning: built-in defaults, an optional
//! `launchdeck.toml` (or the file given with `--config`), then
//! `LAUNCHDECK__SECTION__KEY` environment variables. A `.env` file in the
//! working directory is loaded into the environment first.

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment, File};
use launchdeck_core::logging_facility::Profile;
use launchdeck_core::LifecycleConfig;
use launchdeck_ingest::FeedConfig;
use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = "launchdeck";
const ENV_PREFIX: &str = "LAUNCHDECK";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub upstream: UpstreamSettings,
    pub launches: LaunchSettings,
    pub ingest: IngestSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    pub path: PathBuf,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(".launchdeck/launchdeck.db"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UpstreamSettings {
    pub base_url: String,
    pub timeout_secs: u64,
    pub page_size: u32,
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        let feed = FeedConfig::default();
        Self {
            base_url: feed.base_url,
            timeout_secs: feed.timeout.as_secs(),
            page_size: feed.page_size,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LaunchSettings {
    pub default_flight_number: i64,
    pub default_customers: Vec<String>,
}

impl Default for LaunchSettings {
    fn default() -> Self {
        let lifecycle = LifecycleConfig::default();
        Self {
            default_flight_number: lifecycle.default_flight_number,
            default_customers: lifecycle.default_customers,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IngestSettings {
    /// Load the upstream catalog at startup unless it is already present
    pub sync_on_start: bool,
}

impl Default for IngestSettings {
    fn default() -> Self {
        Self {
            sync_on_start: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub profile: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            profile: "development".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from the layered sources
    ///
    /// # Errors
    /// Fails if an explicitly given file is missing or any source is malformed
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        // A missing .env is normal
        let _ = dotenvy::dotenv();

        let file = match config_file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let settings = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("launches.default_customers"),
            )
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }

    pub fn lifecycle_config(&self) -> LifecycleConfig {
        LifecycleConfig {
            default_flight_number: self.launches.default_flight_number,
            default_customers: self.launches.default_customers.clone(),
        }
    }

    pub fn feed_config(&self) -> FeedConfig {
        FeedConfig {
            base_url: self.upstream.base_url.clone(),
            timeout: Duration::from_secs(self.upstream.timeout_secs),
            page_size: self.upstream.page_size,
        }
    }

    /// The configured logging profile, falling back to development
    pub fn logging_profile(&self) -> Profile {
        self.logging
            .profile
            .parse()
            .unwrap_or(Profile::Development)
    }
}
