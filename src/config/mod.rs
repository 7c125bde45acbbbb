#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{Cli, Command};
pub use toml_config::TomlConfig;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};

pub const DEFAULT_DATA_FILE: &str = "registrations.json";

/// Effective settings after merging CLI flags, the optional TOML file,
/// and defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_file: String,
    pub verbose: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: DEFAULT_DATA_FILE.to_string(),
            verbose: false,
        }
    }
}

impl ConfigProvider for AppConfig {
    fn data_file(&self) -> &str {
        &self.data_file
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data_file", &self.data_file)
    }
}
