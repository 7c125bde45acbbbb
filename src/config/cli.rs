use clap::{Parser, Subcommand};

use crate::config::{AppConfig, TomlConfig};
use crate::utils::error::Result;

#[derive(Debug, Clone, Parser)]
#[command(name = "sports-registration")]
#[command(about = "Student sports registration backed by a JSON file store")]
pub struct Cli {
    /// Path to the registration store (overrides the config file)
    #[arg(long)]
    pub data_file: Option<String>,

    /// Optional TOML configuration file
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Register a student for a sport
    Register {
        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        #[arg(long)]
        sport: String,

        #[arg(long)]
        department: String,

        #[arg(long)]
        enrollment_no: String,
    },

    /// Show all registrations
    List,

    /// Show registrations for one sport or one department
    Search {
        #[arg(long)]
        sport: Option<String>,

        #[arg(long)]
        department: Option<String>,
    },

    /// Print the sport and department catalogs
    Catalog,
}

impl Cli {
    /// Merge order: defaults, then the TOML file, then explicit flags.
    pub fn resolve_config(&self) -> Result<AppConfig> {
        let mut config = AppConfig::default();

        if let Some(path) = &self.config {
            config = TomlConfig::from_file(path)?.apply(config);
        }

        if let Some(data_file) = &self.data_file {
            config.data_file = data_file.clone();
        }
        if self.verbose {
            config.verbose = true;
        }

        Ok(config)
    }
}
