pub mod settings;

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

pub use settings::Settings;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "startlists")]
#[command(about = "Browse CTS .scb start lists as events, heats and lanes")]
pub struct CliConfig {
    /// Directory holding .scb start list files; overrides the settings file
    #[arg(long)]
    pub startlist_dir: Option<String>,

    /// TOML settings file; defaults are used when the file is absent
    #[arg(long, default_value = "starter-settings.toml")]
    pub settings: String,

    /// Print every event and heat, then exit
    #[arg(long)]
    pub dump: bool,

    /// Print the parsed catalog as JSON, then exit
    #[arg(long)]
    pub json: bool,

    /// Step through heats on stdin commands (n/p heat, N/P event, q quit)
    #[arg(long)]
    pub interactive: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(dir) = &self.startlist_dir {
            validation::validate_path("startlist_dir", dir)?;
        }
        validation::validate_non_empty_string("settings", &self.settings)?;
        Ok(())
    }
}
