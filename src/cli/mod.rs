//! Command-line layer shared by the `strings-missing` and `strings-clean`
//! binaries.

use anyhow::Result;

pub mod args;
mod cleanup_report;
pub mod commands;
mod exit_status;
mod prompt;
mod report;

pub use args::{CleanArgs, MissingArgs};
pub use exit_status::ExitStatus;

/// Compare locale files and print missing keys.
pub fn run_missing(args: &MissingArgs) -> Result<ExitStatus> {
    let result = commands::missing::missing(args)?;
    report::print(&result, args.verbose);
    Ok(result.exit_status())
}

/// Classify usage, write the report and optionally remove unused entries.
pub fn run_clean(args: &CleanArgs) -> Result<ExitStatus> {
    let result = commands::clean::clean(args)?;
    report::print(&result, args.verbose);
    Ok(result.exit_status())
}
