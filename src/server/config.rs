use std::{str::FromStr, time::Duration};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_SOURCE_PORT: u16 = 3306;
const DEFAULT_PLAYERS_TABLE: &str = "players";
const DEFAULT_BATCH_SIZE: usize = 50;
const DEFAULT_SYNC_CRON: &str = "0 0 */4 * * *";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub source: SourceConfig,

    pub sync: SyncConfig,
    pub sync_cron: String,
    pub store_timeout: Duration,
}

/// Credentials and limits for the external game server database.
///
/// Values are kept as read from the environment. Missing credentials are only reported
/// when a connector is built from this config, so the website keeps serving while the
/// game server side is unconfigured.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub timeout: Duration,
}

/// Tuning for a single sync run.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Name of the player table on the game server
    pub players_table: String,
    /// Number of normalized records sent to the store per upsert call
    pub batch_size: usize,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            players_table: DEFAULT_PLAYERS_TABLE.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let source_timeout =
            Duration::from_secs(parse_var("SOURCE_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?);

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: optional_var("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            source: SourceConfig {
                host: optional_var("FIVEM_DB_HOST").unwrap_or_default(),
                port: parse_var("FIVEM_DB_PORT", DEFAULT_SOURCE_PORT)?,
                user: optional_var("FIVEM_DB_USER").unwrap_or_default(),
                password: optional_var("FIVEM_DB_PASSWORD").unwrap_or_default(),
                database: optional_var("FIVEM_DB_NAME").unwrap_or_default(),
                timeout: source_timeout,
            },
            sync: SyncConfig {
                players_table: optional_var("FIVEM_PLAYERS_TABLE")
                    .unwrap_or_else(|| DEFAULT_PLAYERS_TABLE.to_string()),
                batch_size: parse_var("SYNC_BATCH_SIZE", DEFAULT_BATCH_SIZE)?.max(1),
            },
            sync_cron: optional_var("SYNC_CRON").unwrap_or_else(|| DEFAULT_SYNC_CRON.to_string()),
            store_timeout: Duration::from_secs(parse_var(
                "STORE_TIMEOUT_SECS",
                DEFAULT_TIMEOUT_SECS,
            )?),
        })
    }
}

impl SourceConfig {
    /// Returns the name of the first required credential that is blank, if any.
    ///
    /// The password may legitimately be empty on local game server setups and is not
    /// checked.
    pub fn missing_credential(&self) -> Option<&'static str> {
        [
            ("FIVEM_DB_HOST", &self.host),
            ("FIVEM_DB_USER", &self.user),
            ("FIVEM_DB_NAME", &self.database),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }
}

/// Reads an environment variable, treating blank values as unset.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match optional_var(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }),
    }
}
