//! Environment configuration
//!
//! The calculator takes no flags and reads no files; the few knobs it has come
//! from the environment:
//!
//! | Variable         | Meaning                                  | Default |
//! |------------------|------------------------------------------|---------|
//! | `RPNC_CLIPBOARD` | copy the bottom stack value on quit      | on      |
//! | `RPNC_LOG_FILE`  | write log records to this file           | unset   |
//! | `RPNC_LOG`       | `env_logger` filter for the log file     | `info`  |

use std::path::PathBuf;
use thiserror::Error;

pub const ENV_CLIPBOARD: &str = "RPNC_CLIPBOARD";
pub const ENV_LOG_FILE: &str = "RPNC_LOG_FILE";
pub const ENV_LOG: &str = "RPNC_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{key} must be one of 1/0, true/false, on/off, yes/no (got '{value}')")]
    InvalidFlag { key: &'static str, value: String },
}

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Copy the bottom stack value to the clipboard on quit
    pub clipboard: bool,
    /// Log destination; logging is off when `None`
    pub log_file: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            clipboard: true,
            log_file: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(value) = lookup(ENV_CLIPBOARD) {
            config.clipboard = parse_flag(ENV_CLIPBOARD, &value)?;
        }
        config.log_file = lookup(ENV_LOG_FILE)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);
        if let Some(filter) = lookup(ENV_LOG).filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }

        Ok(config)
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config_from(&[]).unwrap(), Config::default());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            (ENV_CLIPBOARD, "Off"),
            (ENV_LOG_FILE, "/tmp/rpnc.log"),
            (ENV_LOG, "debug"),
        ])
        .unwrap();

        assert!(!config.clipboard);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/rpnc.log")));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = config_from(&[(ENV_LOG_FILE, " "), (ENV_LOG, "")]).unwrap();
        assert_eq!(config.log_file, None);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_invalid_flag() {
        assert_eq!(
            config_from(&[(ENV_CLIPBOARD, "maybe")]),
            Err(ConfigError::InvalidFlag {
                key: ENV_CLIPBOARD,
                value: "maybe".to_string()
            })
        );
    }
}
