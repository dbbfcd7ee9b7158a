use crate::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the directory under `$HOME` holding the config file
const CONFIG_DIR_NAME: &str = ".ff-likes";

/// Configuration-specific errors that can occur during config operations
///
/// # Variants
/// * `HomeNotFound` - The user's home directory could not be determined
/// * `InvalidValue` - A configuration value is invalid for its field
/// * `TomlError` - Error parsing TOML data
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not find home directory")]
    HomeNotFound,

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("TOML parsing error: {0}")]
    TomlError(String),
}

/// API configuration section
///
/// # Fields
/// * `base_url` - Optional base URL for API requests
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ApiSection {
    pub base_url: Option<String>,
}

/// Contents of `~/.ff-likes/config.toml`
///
/// ```toml
/// [api]
/// base_url = "http://localhost:3000/api"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ConfigData {
    pub api: Option<ApiSection>,
}

/// Values given on the command line or through the environment.
/// These win over anything in the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
}

/// Read-only view over the config file plus command-line overrides
#[derive(Debug, Clone)]
pub struct Config {
    pub config_path: PathBuf,
    pub data: ConfigData,
    overrides: Overrides,
}

/// Implementation of the API config trait for the main Config struct
impl likes_api::ApiConfig for Config {
    type Error = CliError;

    fn get_base_url(&self) -> std::result::Result<Option<String>, Self::Error> {
        Ok(self.base_url())
    }

    fn get_api_key(&self) -> std::result::Result<Option<String>, Self::Error> {
        Ok(self.api_key())
    }
}

impl Config {
    /// Load the config file from the default location (`~/.ff-likes/config.toml`)
    ///
    /// # Errors
    /// * `ConfigError::HomeNotFound` - If the home directory cannot be found
    /// * `ConfigError::TomlError` - If TOML parsing fails
    /// * `CliError::Io` - If the file exists but cannot be read
    pub fn new(overrides: Overrides) -> Result<Self> {
        let config_path = get_config_dir()?.join("config.toml");
        Self::load_from(config_path, overrides)
    }

    /// Load the config file from an explicit path. A missing file yields defaults.
    pub fn load_from(config_path: impl AsRef<Path>, overrides: Overrides) -> Result<Self> {
        let config_path = config_path.as_ref().to_path_buf();

        let data = if config_path.exists() {
            log::debug!("Loading config from {}", config_path.display());
            let content = fs::read_to_string(&config_path).map_err(CliError::Io)?;
            toml::from_str(&content).map_err(|e| ConfigError::TomlError(e.to_string()))?
        } else {
            log::debug!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            ConfigData::default()
        };

        let config = Config {
            config_path,
            data,
            overrides,
        };
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if let Some(url) = self.file_base_url() {
            if url.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "api.base_url".to_string(),
                    value: url,
                }
                .into());
            }
        }
        Ok(())
    }

    fn file_base_url(&self) -> Option<String> {
        self.data.api.as_ref().and_then(|api| api.base_url.clone())
    }

    /// Base URL: override, then config file. `None` means the client default.
    pub fn base_url(&self) -> Option<String> {
        first_present([self.overrides.base_url.clone(), self.file_base_url()])
    }

    /// API key supplied on the command line or through `FF_LIKES_API_KEY`.
    /// Keys are never read from or written to the config file.
    pub fn api_key(&self) -> Option<String> {
        first_present([self.overrides.api_key.clone()])
    }

    /// Show the effective configuration as a formatted string
    pub fn show_config(&self) -> String {
        let effective = ConfigData {
            api: Some(ApiSection {
                base_url: Some(
                    self.base_url()
                        .unwrap_or_else(|| likes_api::DEFAULT_BASE_URL.to_string()),
                ),
            }),
        };
        toml::to_string_pretty(&effective).unwrap_or_else(|_| "Error formatting config".to_string())
    }
}

/// First value that is set and not blank
fn first_present<const N: usize>(candidates: [Option<String>; N]) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

/// Gets the path to the configuration directory (`~/.ff-likes/`)
fn get_config_dir() -> Result<PathBuf> {
    let home_dir = home::home_dir().ok_or(ConfigError::HomeNotFound)?;
    Ok(home_dir.join(CONFIG_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use likes_api::ApiConfig;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config =
            Config::load_from(dir.path().join("config.toml"), Overrides::default()).unwrap();

        assert_eq!(config.data, ConfigData::default());
        assert_eq!(config.base_url(), None);
        assert_eq!(config.api_key(), None);
        assert!(config.show_config().contains(likes_api::DEFAULT_BASE_URL));
    }

    #[test]
    fn test_file_base_url() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[api]\nbase_url = \"https://likes.example.com/api\"\n");

        let config = Config::load_from(&path, Overrides::default()).unwrap();
        assert_eq!(
            config.base_url(),
            Some("https://likes.example.com/api".to_string())
        );
    }

    #[test]
    fn test_override_wins_over_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[api]\nbase_url = \"https://file.example.com/api\"\n");

        let overrides = Overrides {
            base_url: Some("http://127.0.0.1:8080/api".to_string()),
            api_key: Some("cli-key".to_string()),
        };
        let config = Config::load_from(&path, overrides).unwrap();

        assert_eq!(
            config.get_base_url().unwrap(),
            Some("http://127.0.0.1:8080/api".to_string())
        );
        assert_eq!(config.get_api_key().unwrap(), Some("cli-key".to_string()));
    }

    #[test]
    fn test_blank_override_falls_through() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[api]\nbase_url = \"https://file.example.com/api\"\n");

        let overrides = Overrides {
            base_url: Some("   ".to_string()),
            api_key: Some(String::new()),
        };
        let config = Config::load_from(&path, overrides).unwrap();

        assert_eq!(
            config.base_url(),
            Some("https://file.example.com/api".to_string())
        );
        assert_eq!(config.api_key(), None);
    }

    #[test]
    fn test_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[api\nbase_url = ");

        let err = Config::load_from(&path, Overrides::default()).unwrap_err();
        assert!(matches!(err, CliError::Config(ConfigError::TomlError(_))));
    }

    #[test]
    fn test_blank_base_url_in_file_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[api]\nbase_url = \"\"\n");

        let err = Config::load_from(&path, Overrides::default()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Config(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_client_from_config() {
        let dir = TempDir::new().unwrap();
        let overrides = Overrides {
            base_url: Some("http://127.0.0.1:9/api".to_string()),
            api_key: Some("seeded".to_string()),
        };
        let config = Config::load_from(dir.path().join("config.toml"), overrides).unwrap();

        let client = likes_api::LikesApiClient::from_config(&config).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9/api");
        assert_eq!(client.api_key(), Some("seeded"));
    }
}
