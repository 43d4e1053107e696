//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides. The
//! browser build only uses the defaults.

use alloy_primitives::Address;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::contract::{Contracts, CROWDFUNDING_ADDRESS, TOKEN_ADDRESS};
use crate::render::DEFAULT_EXPLORER_URL;
use crate::rpc::ReceiptPolling;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub network: NetworkConfig,

    #[serde(default)]
    pub transactions: TransactionsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the ledgers live
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConfig {
    /// Node URL for the HTTP transport
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,

    #[serde(default = "default_crowdfunding_address")]
    pub crowdfunding_address: Address,

    #[serde(default = "default_token_address")]
    pub token_address: Address,

    #[serde(default = "default_explorer_url")]
    pub explorer_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_rpc_url() -> String {
    "https://alfajores-forno.celo-testnet.org".to_string()
}

fn default_crowdfunding_address() -> Address {
    CROWDFUNDING_ADDRESS
}

fn default_token_address() -> Address {
    TOKEN_ADDRESS
}

fn default_explorer_url() -> String {
    DEFAULT_EXPLORER_URL.to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            crowdfunding_address: default_crowdfunding_address(),
            token_address: default_token_address(),
            explorer_url: default_explorer_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl NetworkConfig {
    pub fn contracts(&self) -> Contracts {
        Contracts {
            crowdfunding: self.crowdfunding_address,
            token: self.token_address,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Transaction confirmation settings
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionsConfig {
    #[serde(default = "default_poll_interval")]
    pub receipt_poll_interval_ms: u64,

    /// Unset waits for the receipt indefinitely
    #[serde(default)]
    pub receipt_poll_limit: Option<u32>,
}

fn default_poll_interval() -> u64 {
    1000
}

impl Default for TransactionsConfig {
    fn default() -> Self {
        Self {
            receipt_poll_interval_ms: default_poll_interval(),
            receipt_poll_limit: None,
        }
    }
}

impl TransactionsConfig {
    pub fn receipt_polling(&self) -> ReceiptPolling {
        ReceiptPolling {
            interval: Duration::from_millis(self.receipt_poll_interval_ms),
            limit: self.receipt_poll_limit,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

#[cfg(feature = "native")]
impl Config {
    /// Load configuration from a file
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &std::path::Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("crowdfund").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("CROWDFUND_RPC_URL") {
            self.network.rpc_url = url;
        }
        if let Ok(address) = std::env::var("CROWDFUND_CONTRACT_ADDRESS") {
            match address.parse() {
                Ok(a) => self.network.crowdfunding_address = a,
                Err(e) => tracing::warn!("Ignoring CROWDFUND_CONTRACT_ADDRESS: {}", e),
            }
        }
        if let Ok(address) = std::env::var("CROWDFUND_TOKEN_ADDRESS") {
            match address.parse() {
                Ok(a) => self.network.token_address = a,
                Err(e) => tracing::warn!("Ignoring CROWDFUND_TOKEN_ADDRESS: {}", e),
            }
        }
        if let Ok(url) = std::env::var("CROWDFUND_EXPLORER_URL") {
            self.network.explorer_url = url;
        }

        if let Ok(level) = std::env::var("CROWDFUND_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("CROWDFUND_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    format!(
        r#"# Crowdfund Configuration
#
# Environment variables override these settings:
# - CROWDFUND_RPC_URL
# - CROWDFUND_CONTRACT_ADDRESS
# - CROWDFUND_TOKEN_ADDRESS
# - CROWDFUND_EXPLORER_URL
# - CROWDFUND_LOG_LEVEL
# - CROWDFUND_LOG_FORMAT

[network]
# JSON-RPC endpoint of a node that manages the signing account
rpc_url = "{rpc_url}"

# Crowdfunding ledger contract
crowdfunding_address = "{crowdfunding}"

# Token ledger contract (approve / balanceOf)
token_address = "{token}"

# Block explorer used for creator links
explorer_url = "{explorer}"

# HTTP request timeout in seconds
request_timeout_secs = {timeout}

[transactions]
# How often to poll for a transaction receipt (ms)
receipt_poll_interval_ms = {interval}

# Give up after this many polls (unset = wait indefinitely)
# receipt_poll_limit = 120

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#,
        rpc_url = default_rpc_url(),
        crowdfunding = CROWDFUNDING_ADDRESS,
        token = TOKEN_ADDRESS,
        explorer = DEFAULT_EXPLORER_URL,
        timeout = default_request_timeout(),
        interval = default_poll_interval(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_deployment_addresses() {
        let config = Config::default();
        assert_eq!(config.network.contracts(), Contracts::default());
        assert_eq!(config.transactions.receipt_polling(), ReceiptPolling::default());
        assert_eq!(config.logging.level, "info");
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.network.crowdfunding_address, CROWDFUNDING_ADDRESS);
        assert_eq!(config.network.token_address, TOKEN_ADDRESS);
        assert_eq!(config.transactions.receipt_poll_limit, None);
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[network]\nrpc_url = \"http://localhost:8545\"\n\n[transactions]\nreceipt_poll_limit = 5\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.network.rpc_url, "http://localhost:8545");
        assert_eq!(config.network.crowdfunding_address, CROWDFUNDING_ADDRESS);
        assert_eq!(config.transactions.receipt_poll_limit, Some(5));
        assert_eq!(config.transactions.receipt_poll_interval_ms, 1000);
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io { .. })));

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "[network]\ncrowdfunding_address = \"nope\"\n").unwrap();
        assert!(matches!(Config::load(&bad), Err(ConfigError::Parse { .. })));
    }
}
