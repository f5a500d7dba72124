//! CLI type definitions
//!
//! This module contains the clap structures that define the CLI interface.

use clap::Parser;
use figment::providers::Serialized;
use figment::Figment;

use crate::cli::commands::report::ReportArgs;
use crate::infrastructure::logging::LogFormat;

#[derive(Parser, Debug)]
#[command(name = "simparams")]
#[command(about = "Print the simulation parameters stored in a JSON file", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub report: ReportArgs,

    /// Output in JSON format
    #[arg(short, long)]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error); overrides SIMPARAMS_LOGGING__LEVEL
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub log_format: Option<LogFormat>,
}

impl Cli {
    /// Settings overrides given on the command line, for
    /// [`ConfigLoader::load_with`](crate::infrastructure::config::ConfigLoader::load_with).
    pub fn settings_overrides(&self) -> Figment {
        let mut figment = Figment::new();
        if let Some(level) = &self.log_level {
            figment = figment.merge(Serialized::default("logging.level", level.clone()));
        }
        if let Some(format) = self.log_format {
            figment = figment.merge(Serialized::default("logging.format", format));
        }
        figment
    }
}
