//! CLI command implementations.

pub mod mode;
pub mod run;
pub mod strategies;
pub mod validate;

use anyhow::Result;
use signals_monitor::CycleReport;

use crate::cli::OutputFormat;

/// Print cycle reports in the requested format.
pub(crate) fn print_reports(reports: &[CycleReport], output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(reports)?),
        OutputFormat::Text => {
            for report in reports {
                println!("{}", report);
            }
        }
    }
    Ok(())
}
