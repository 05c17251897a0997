//! Top-level tool configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{AccountsConfig, ConfigError, DeployConfig, GenesisConfig, RpcConfig, WatchConfig};

/// Complete configuration of the `privnet` tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolConfig {
    /// Node endpoints.
    #[serde(default)]
    pub rpc: RpcConfig,

    /// Account provisioning and unlocking.
    #[serde(default)]
    pub accounts: AccountsConfig,

    /// Contract deployment.
    #[serde(default)]
    pub deploy: DeployConfig,

    /// Event watching.
    #[serde(default)]
    pub watch: WatchConfig,

    /// Genesis header fields.
    #[serde(default)]
    pub genesis: GenesisConfig,
}

impl ToolConfig {
    /// Load configuration from a file path, auto-detecting format by extension.
    ///
    /// If the path is `None`, returns the default configuration.
    /// Supported extensions: `.json` for JSON, all others default to TOML.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = path.map_or_else(
            || Ok(Self::default()),
            |p| {
                let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("toml");
                match ext {
                    "json" => Self::from_json_file(p),
                    _ => Self::from_toml_file(p),
                }
            },
        )?;
        config.accounts.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read { path: path.into(), source: e })?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Load configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read { path: path.into(), source: e })?;
        Self::from_json(&contents)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Serialize configuration to a JSON string.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
