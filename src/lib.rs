pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{Cli, Command};
pub use config::{AppConfig, TomlConfig};

pub use adapters::json_store::JsonFileStore;
pub use crate::core::service::RegistrationService;
pub use domain::model::{LoadStatus, Registration, StoreSnapshot, DEPARTMENTS, SPORTS};
pub use utils::error::{RegistrationError, Result};
