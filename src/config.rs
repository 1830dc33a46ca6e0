use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use log::LevelFilter;

use crate::error::{AppError, AppResult};

pub const DEFAULT_API_URL: &str = "https://api.quicksell.co/v1/internal/frontend-assignment";

const API_URL_VAR: &str = "KANBAN_API_URL";
const STATE_DIR_VAR: &str = "KANBAN_STATE_DIR";
const LOG_VAR: &str = "KANBAN_LOG";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_url: String,
    pub state_dir: PathBuf,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            state_dir: PathBuf::from(".kanban"),
            log_level: LevelFilter::Warn,
        }
    }
}

impl AppConfig {
    pub fn load() -> AppResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from a variable lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let api_url = read(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let state_dir = match read(STATE_DIR_VAR) {
            Some(dir) => PathBuf::from(dir),
            None => config_directory()?,
        };

        let log_level = match read(LOG_VAR) {
            Some(level) => LevelFilter::from_str(&level).map_err(|_| {
                AppError::Configuration(format!("{LOG_VAR} has unknown log level '{level}'"))
            })?,
            None => LevelFilter::Warn,
        };

        Ok(Self {
            api_url,
            state_dir,
            log_level,
        })
    }
}

pub fn config_directory() -> AppResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("kanban"))
        .ok_or_else(|| {
            AppError::Configuration("unable to determine the user config directory".to_string())
        })
}
