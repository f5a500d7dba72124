//! Command-line interface
//!
//! Parses arguments, sets up settings and logging, runs the report and
//! turns failures into a diagnostic on stderr plus a non-zero exit status.

pub mod commands;
pub mod output;
pub mod types;

use anyhow::Result;

use crate::domain::ParamsError;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::logging::LoggerImpl;

pub use types::Cli;

/// Exit status for any failure after argument parsing.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Load settings, start logging and run the report.
///
/// The logger guard is dropped before this returns so file output is
/// flushed even when the caller exits right after.
pub fn run(cli: &Cli) -> Result<()> {
    let settings = ConfigLoader::load_with(cli.settings_overrides())?;
    let _logger = LoggerImpl::init(&settings.logging)?;

    commands::report::execute(&cli.report, cli.json)
}

/// Print `err` to stderr and exit with [`FAILURE_EXIT_CODE`].
///
/// Stdout is left untouched so partial reports stay well-formed.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let kind = err
            .downcast_ref::<ParamsError>()
            .map_or("error", ParamsError::kind);
        let body = serde_json::json!({
            "error": {
                "kind": kind,
                "message": format!("{err:#}"),
            }
        });
        eprintln!("{body}");
    } else {
        eprintln!("{} {err:#}", console::style("Error:").red().bold().for_stderr());
    }
    std::process::exit(FAILURE_EXIT_CODE);
}
