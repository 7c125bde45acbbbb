use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::utils::error::{RegistrationError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub storage: StorageConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RegistrationError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RegistrationError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Substitutes `${VAR}` references with environment values; unknown
    /// variables are left in place.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Folds this file's settings into `base`; values present here win.
    pub fn apply(&self, base: AppConfig) -> AppConfig {
        AppConfig {
            data_file: self.storage.data_file.clone(),
            verbose: self
                .logging
                .as_ref()
                .and_then(|logging| logging.verbose)
                .unwrap_or(base.verbose),
        }
    }
}
