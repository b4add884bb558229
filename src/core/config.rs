//! Configuration management for the Fiken MCP server.
//!
//! Configuration is populated from environment variables (optionally via a
//! `.env` file) on top of defaults.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use crate::fiken::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Main configuration structure for the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Fiken API access.
    pub fiken: FikenConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Fiken API configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct FikenConfig {
    /// Personal API token, sent as a bearer credential.
    pub api_key: Option<String>,

    /// API origin, without trailing slash.
    pub base_url: String,

    /// Convert monetary fields between øre and kroner at the tool boundary.
    pub convert_money: bool,

    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
}

/// Custom Debug implementation to redact the API key from logs.
impl std::fmt::Debug for FikenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FikenConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("convert_money", &self.convert_money)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for FikenConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            convert_money: true,
            timeout_secs: 30,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "fiken-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            fiken: FikenConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix, API settings the `FIKEN_` prefix.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        if let Ok(api_key) = std::env::var("FIKEN_API_KEY") {
            config.fiken.api_key = Some(api_key);
        }

        if let Ok(base_url) = std::env::var("FIKEN_API_BASE_URL") {
            info!("Using Fiken API base URL {}", base_url);
            config.fiken.base_url = base_url;
        }

        if let Ok(convert) = std::env::var("FIKEN_CONVERT_MONEY") {
            config.fiken.convert_money = parse_flag(&convert).unwrap_or_else(|| {
                warn!("Ignoring invalid FIKEN_CONVERT_MONEY value: {}", convert);
                true
            });
        }

        if let Ok(timeout) = std::env::var("FIKEN_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => config.fiken.timeout_secs = secs,
                Err(_) => warn!("Ignoring invalid FIKEN_TIMEOUT_SECS value: {}", timeout),
            }
        }

        config
    }

    /// Check that the configuration can be used to start the server.
    pub fn validate(&self) -> Result<()> {
        match self.fiken.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(()),
            _ => Err(Error::config(
                "FIKEN_API_KEY environment variable is required",
            )),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn clear_fiken_env() {
        unsafe {
            std::env::remove_var("FIKEN_API_KEY");
            std::env::remove_var("FIKEN_API_BASE_URL");
            std::env::remove_var("FIKEN_CONVERT_MONEY");
            std::env::remove_var("FIKEN_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_fiken_settings_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_fiken_env();
        unsafe {
            std::env::set_var("FIKEN_API_KEY", "test_key_12345");
            std::env::set_var("FIKEN_API_BASE_URL", "http://localhost:9000");
            std::env::set_var("FIKEN_CONVERT_MONEY", "false");
            std::env::set_var("FIKEN_TIMEOUT_SECS", "5");
        }
        let config = Config::from_env();
        assert_eq!(config.fiken.api_key.as_deref(), Some("test_key_12345"));
        assert_eq!(config.fiken.base_url, "http://localhost:9000");
        assert!(!config.fiken.convert_money);
        assert_eq!(config.fiken.timeout_secs, 5);
        clear_fiken_env();
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_fiken_env();
        unsafe {
            std::env::set_var("FIKEN_CONVERT_MONEY", "maybe");
            std::env::set_var("FIKEN_TIMEOUT_SECS", "soon");
        }
        let config = Config::from_env();
        assert!(config.fiken.convert_money);
        assert_eq!(config.fiken.timeout_secs, 30);
        clear_fiken_env();
    }

    #[test]
    fn test_validate_requires_api_key() {
        let mut config = Config::default();
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        config.fiken.api_key = Some("".to_string());
        assert!(config.validate().is_err());

        config.fiken.api_key = Some("abc".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_api_key_redacted_in_debug() {
        let fiken = FikenConfig {
            api_key: Some("super_secret_key".to_string()),
            ..FikenConfig::default()
        };
        let debug_str = format!("{:?}", fiken);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.name, "fiken-mcp-server");
        assert_eq!(config.fiken.base_url, "https://api.fiken.no/api/v2");
        assert!(config.fiken.convert_money);
        assert!(config.fiken.api_key.is_none());
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" 0 "), Some(false));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("nope"), None);
    }
}
