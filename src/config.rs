use crate::error::{Result, VersionError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VersionConfig {
    #[serde(default)]
    pub parser: ParserConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ParserConfig {
    #[serde(default)]
    pub match_mode: MatchMode,
}

/// How much of the input the version grammar must cover.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// The version may appear anywhere in the input.
    #[default]
    Find,
    /// The input must be exactly one version and nothing else.
    Full,
}

impl VersionConfig {
    /// Parses configuration handed over by the embedding application.
    /// Missing sections and keys fall back to their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: VersionConfig = toml::from_str(contents)
            .map_err(|e| VersionError::ConfigError(format!("Failed to parse config: {e}")))?;

        log::debug!("Parser match mode: {:?}", config.parser.match_mode);
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| VersionError::ConfigError(format!("Failed to serialize config: {e}")))
    }
}
