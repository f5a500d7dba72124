//! Implementation of the parameter report.

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{display_value, AttributeMap, SimulationParams, REPORT_FIELDS};
use crate::infrastructure::params::{ParamsLoader, DEFAULT_PARAMS_PATH};

/// Arguments selecting the parameter file and report mode.
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Path to the JSON parameter file
    #[arg(short, long, env = "SIMPARAMS_FILE", default_value = DEFAULT_PARAMS_PATH)]
    pub params: PathBuf,

    /// Check that every field has its expected type before printing anything
    #[arg(long)]
    pub strict: bool,
}

/// The six reported fields, collected up front.
#[derive(Debug, serde::Serialize)]
#[serde(transparent)]
pub struct ReportOutput {
    /// Report fields in output order.
    pub fields: AttributeMap,
}

impl ReportOutput {
    /// Collect every report field, failing on the first missing one.
    pub fn collect(params: &AttributeMap) -> crate::domain::ParamsResult<Self> {
        let mut fields = AttributeMap::default();
        for name in REPORT_FIELDS {
            fields.insert(name, params.field(name)?.clone());
        }
        Ok(Self { fields })
    }

    /// Collect the fields after checking their types.
    pub fn collect_strict(params: &AttributeMap) -> Result<Self> {
        let typed = SimulationParams::try_from(params)?;
        match serde_json::to_value(&typed).context("Failed to serialize checked parameters")? {
            Value::Object(map) => Ok(Self {
                fields: AttributeMap::new(map),
            }),
            other => anyhow::bail!("Checked parameters serialized to {other}, expected an object"),
        }
    }
}

impl CommandOutput for ReportOutput {
    fn to_human(&self) -> String {
        self.fields
            .iter()
            .map(|(name, value)| format_line(name, value))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

fn format_line(name: &str, value: &Value) -> String {
    format!("{name} = {}", display_value(value))
}

/// Write one `<field> = <value>` line per report field, in order.
///
/// Each line is written as soon as its field is read, so a missing field
/// leaves the earlier lines in `out`. Returns the number of lines written.
pub fn write_report<W: Write>(params: &AttributeMap, out: &mut W) -> Result<usize> {
    let mut written = 0;
    for name in REPORT_FIELDS {
        let value = params.field(name)?;
        writeln!(out, "{}", format_line(name, value)).context("Failed to write report line")?;
        written += 1;
    }
    out.flush().context("Failed to flush report output")?;
    Ok(written)
}

/// Load the parameter file and print the report.
pub fn execute(args: &ReportArgs, json_mode: bool) -> Result<()> {
    let params = ParamsLoader::load(&args.params)?;
    debug!(strict = args.strict, json = json_mode, "Reporting parameters");

    if args.strict {
        let report = ReportOutput::collect_strict(&params)?;
        output(&report, json_mode);
    } else if json_mode {
        let report = ReportOutput::collect(&params)?;
        output(&report, json_mode);
    } else {
        let stdout = io::stdout();
        let lines = write_report(&params, &mut stdout.lock())?;
        info!(lines, "Report written");
    }

    Ok(())
}
