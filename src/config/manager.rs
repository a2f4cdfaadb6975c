//! Configuration manager for loading and saving configuration
//!
//! Configuration lives in `$FOLIO_HOME/folio.json` (current directory when
//! unset). Writes go through a temporary file in the same directory and are
//! renamed into place so a crash never leaves a half-written document.

use crate::config::models::FolioConfig;
use crate::error::{FolioError, Result, StringError};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable naming the configuration directory
pub const FOLIO_HOME_ENV: &str = "FOLIO_HOME";

/// Configuration file name inside the configuration directory
pub const CONFIG_FILE_NAME: &str = "folio.json";

/// Configuration manager
pub struct ConfigManager;

impl ConfigManager {
    /// Get the path to the configuration file
    ///
    /// Returns: `$FOLIO_HOME/folio.json`
    pub fn get_config_path() -> PathBuf {
        let home = std::env::var(FOLIO_HOME_ENV).unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(CONFIG_FILE_NAME)
    }

    /// Load configuration from the default location
    pub fn load() -> Result<FolioConfig> {
        Self::load_from(&Self::get_config_path())
    }

    /// Load configuration from `path`
    ///
    /// A missing or corrupt file yields the default configuration. A file that
    /// parses but fails validation is an error, since silently replacing a
    /// deliberate setting would hide the mistake.
    pub fn load_from(path: &Path) -> Result<FolioConfig> {
        if !path.exists() {
            info!("Configuration file {} not found, using defaults", path.display());
            return Ok(FolioConfig::default());
        }

        let json = std::fs::read_to_string(path)?;

        let config: FolioConfig = match serde_json::from_str(&json) {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to parse configuration, using defaults: {}", e);
                return Ok(FolioConfig::default());
            }
        };

        config.validate()?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Save configuration to `path` with an atomic write
    pub fn save_to(config: &FolioConfig, path: &Path) -> Result<()> {
        config.validate()?;

        let config_dir = path.parent().ok_or_else(|| {
            FolioError::ConfigError(StringError::new(format!(
                "Invalid config path: {}",
                path.display()
            )))
        })?;
        std::fs::create_dir_all(config_dir)?;

        let json = serde_json::to_string_pretty(config)?;
        let mut temp = tempfile::NamedTempFile::new_in(config_dir)?;
        temp.write_all(json.as_bytes())?;
        temp.persist(path)
            .map_err(|e| FolioError::ConfigError(Box::new(e)))?;

        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}
