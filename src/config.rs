//! Layered configuration.
//!
//! Defaults are overlaid with the global config file
//! (`~/.config/flowdeck/config.toml`), then an explicit `--config` path (or
//! `FLOWDECK_CONFIG`), then environment variable overrides. Missing files
//! are not errors; malformed files are.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FdError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub directory: DirectoryConfig,
    #[serde(default)]
    pub matching: MatchingConfig,
    #[serde(default)]
    pub market: MarketConfig,
}

impl Config {
    /// Load configuration with the standard layering.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("FLOWDECK_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else if let Some(global) = Self::load_global()? {
            config.merge_patch(global);
        }

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(dir) = dirs::config_dir() else {
            return Ok(None);
        };
        Self::load_patch(&dir.join("flowdeck/config.toml"))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| FdError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| FdError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.directory {
            self.directory.merge(patch);
        }
        if let Some(patch) = patch.matching {
            self.matching.merge(patch);
        }
        if let Some(patch) = patch.market {
            self.market.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var("FLOWDECK_MATCHING_API_KEY") {
            if !key.is_empty() {
                self.matching.api_key = Some(key);
            }
        }
        if let Ok(endpoint) = std::env::var("FLOWDECK_MATCHING_ENDPOINT") {
            if !endpoint.is_empty() {
                self.matching.endpoint = endpoint;
            }
        }
        if let Ok(key) = std::env::var("FLOWDECK_MARKET_API_KEY") {
            if !key.is_empty() {
                self.market.api_key = Some(key);
            }
        }
        if let Ok(endpoint) = std::env::var("FLOWDECK_MARKET_ENDPOINT") {
            if !endpoint.is_empty() {
                self.market.endpoint = endpoint;
            }
        }
    }
}

/// Directory screen settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Fixed page size for directory results.
    pub page_size: usize,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self { page_size: 20 }
    }
}

impl DirectoryConfig {
    fn merge(&mut self, patch: DirectoryPatch) {
        if let Some(page_size) = patch.page_size {
            self.page_size = page_size.max(1);
        }
    }
}

/// Matching (generative-text) service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    pub endpoint: String,
    /// Without a key the client degrades to empty match results.
    pub api_key: Option<String>,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            api_key: None,
            model: "gemini-2.5-flash".to_string(),
            timeout_secs: 30,
        }
    }
}

impl MatchingConfig {
    fn merge(&mut self, patch: MatchingPatch) {
        if let Some(endpoint) = patch.endpoint {
            self.endpoint = endpoint;
        }
        if let Some(api_key) = patch.api_key {
            self.api_key = Some(api_key);
        }
        if let Some(model) = patch.model {
            self.model = model;
        }
        if let Some(timeout) = patch.timeout_secs {
            self.timeout_secs = timeout.max(1);
        }
    }
}

/// Market-data service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.massive.com/v1".to_string(),
            api_key: None,
            timeout_secs: 10,
        }
    }
}

impl MarketConfig {
    fn merge(&mut self, patch: MarketPatch) {
        if let Some(endpoint) = patch.endpoint {
            self.endpoint = endpoint;
        }
        if let Some(api_key) = patch.api_key {
            self.api_key = Some(api_key);
        }
        if let Some(timeout) = patch.timeout_secs {
            self.timeout_secs = timeout.max(1);
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    directory: Option<DirectoryPatch>,
    matching: Option<MatchingPatch>,
    market: Option<MarketPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct DirectoryPatch {
    page_size: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
struct MatchingPatch {
    endpoint: Option<String>,
    api_key: Option<String>,
    model: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct MarketPatch {
    endpoint: Option<String>,
    api_key: Option<String>,
    timeout_secs: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.directory.page_size, 20);
        assert!(config.matching.api_key.is_none());
        assert_eq!(config.market.timeout_secs, 10);
    }

    #[test]
    fn test_load_missing_file_keeps_defaults() {
        let config = Config::load(Some(Path::new("/nonexistent/flowdeck.toml"))).unwrap();
        assert_eq!(config.directory.page_size, 20);
    }

    #[test]
    fn test_load_partial_patch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[directory]\npage_size = 10\n\n[matching]\napi_key = \"k-123\"\n"
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.directory.page_size, 10);
        assert_eq!(config.matching.api_key.as_deref(), Some("k-123"));
        // Untouched sections keep defaults.
        assert_eq!(config.matching.model, "gemini-2.5-flash");
        assert_eq!(config.market.endpoint, "https://api.massive.com/v1");
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not [valid toml").unwrap();

        let err = Config::load(Some(&path));
        assert!(matches!(err, Err(FdError::Config(_))));
    }

    #[test]
    fn test_page_size_floor() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[directory]\npage_size = 0\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.directory.page_size, 1);
    }
}
