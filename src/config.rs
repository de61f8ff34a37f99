//! Runtime configuration
//!
//! Defaults are compiled in and can be overridden from the environment:
//! - `COLOR_MCP_LOG_LEVEL`: off, error, warn, info, debug or trace
//! - `COLOR_MCP_LOG_FILE`: explicit log file path

use std::path::PathBuf;
use std::str::FromStr;

use log::LevelFilter;

pub const SERVER_NAME: &str = "color-mcp";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
/// MCP protocol revision reported by `initialize`
pub const PROTOCOL_VERSION: &str = "2024-11-05";

pub const ENV_LOG_LEVEL: &str = "COLOR_MCP_LOG_LEVEL";
pub const ENV_LOG_FILE: &str = "COLOR_MCP_LOG_FILE";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub name: String,
    pub version: String,
    pub protocol_version: String,
    pub log_level: LevelFilter,
    /// `None` means the default location under the local data directory
    pub log_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: SERVER_NAME.to_string(),
            version: SERVER_VERSION.to_string(),
            protocol_version: PROTOCOL_VERSION.to_string(),
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl ServerConfig {
    /// Build configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            match LevelFilter::from_str(level.trim()) {
                Ok(filter) => config.log_level = filter,
                // Logger is not up yet, so this goes to stderr
                Err(_) => eprintln!(
                    "Unknown {} value '{}', using {}",
                    ENV_LOG_LEVEL, level, config.log_level
                ),
            }
        }

        if let Some(path) = lookup(ENV_LOG_FILE) {
            if !path.trim().is_empty() {
                config.log_file = Some(PathBuf::from(path.trim()));
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_vars(|_| None);
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.name, "color-mcp");
        assert_eq!(config.protocol_version, "2024-11-05");
        assert_eq!(config.log_level, LevelFilter::Info);
        assert!(config.log_file.is_none());
        assert!(config.version.contains('.'));
    }

    #[test]
    fn test_log_level_override_is_case_insensitive() {
        let config = ServerConfig::from_vars(lookup_from(&[(ENV_LOG_LEVEL, "DEBUG")]));
        assert_eq!(config.log_level, LevelFilter::Debug);

        let config = ServerConfig::from_vars(lookup_from(&[(ENV_LOG_LEVEL, "off")]));
        assert_eq!(config.log_level, LevelFilter::Off);
    }

    #[test]
    fn test_unknown_log_level_keeps_default() {
        let config = ServerConfig::from_vars(lookup_from(&[(ENV_LOG_LEVEL, "loud")]));
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_log_file_override() {
        let config = ServerConfig::from_vars(lookup_from(&[(ENV_LOG_FILE, "/tmp/colors.log")]));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/colors.log")));

        let config = ServerConfig::from_vars(lookup_from(&[(ENV_LOG_FILE, "  ")]));
        assert!(config.log_file.is_none());
    }
}
