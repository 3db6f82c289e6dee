//! Application configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the address book snapshot lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding persisted data
    pub dir: PathBuf,
    /// Snapshot file name within the directory
    pub file: String,
}

impl StorageConfig {
    /// Full path of the snapshot file
    #[must_use]
    pub fn snapshot_path(&self) -> PathBuf {
        self.dir.join(&self.file)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./storage"),
            file: "addressbook.json".to_string(),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Snapshot storage settings
    #[serde(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from defaults, an optional config file, and
    /// environment variables
    ///
    /// Precedence, lowest to highest: built-in defaults, `telbook.toml` in
    /// the working directory, then `TELBOOK_*` variables
    /// (e.g. `TELBOOK_STORAGE_DIR`).
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("storage.dir", "./storage")?
            .set_default("storage.file", "addressbook.json")?
            // Load from file if exists
            .add_source(config::File::with_name("telbook").required(false))
            // Override with environment variables (e.g., TELBOOK_STORAGE_DIR)
            .add_source(
                config::Environment::with_prefix("TELBOOK")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
