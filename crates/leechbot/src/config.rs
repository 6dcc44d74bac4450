//! Process configuration from environment variables.
//!
//! The bot token is required and checked before anything else starts;
//! everything else has a sensible default.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use transfer::{TransferConfig, MAX_FILE_SIZE};

const DEFAULT_DOWNLOAD_DIR: &str = "./downloads";
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 3600;
const DEFAULT_SEND_TIMEOUT_SECS: u64 = 300;

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str, String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(name) => write!(f, "{} must be set in the environment or .env file", name),
            ConfigError::Invalid(name, value) => write!(f, "{} has an invalid value: {:?}", name, value),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct Config {
    pub bot_token: String,
    pub download_root: PathBuf,
    pub fetch_timeout: Duration,
    pub send_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bot_token = get("TELOXIDE_TOKEN")
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::Missing("TELOXIDE_TOKEN"))?;

        let download_root = get("DOWNLOAD_DIR")
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| DEFAULT_DOWNLOAD_DIR.to_string());

        Ok(Self {
            bot_token,
            download_root: PathBuf::from(download_root),
            fetch_timeout: seconds(&get, "FETCH_TIMEOUT_SECS", DEFAULT_FETCH_TIMEOUT_SECS)?,
            send_timeout: seconds(&get, "SEND_TIMEOUT_SECS", DEFAULT_SEND_TIMEOUT_SECS)?,
        })
    }

    pub fn transfer_config(&self) -> TransferConfig {
        TransferConfig {
            max_file_size: MAX_FILE_SIZE,
            fetch_timeout: self.fetch_timeout,
            send_timeout: self.send_timeout,
        }
    }
}

fn seconds(
    get: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: u64,
) -> Result<Duration, ConfigError> {
    match get(name) {
        Some(value) => value
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| ConfigError::Invalid(name, value)),
        None => Ok(Duration::from_secs(default)),
    }
}
