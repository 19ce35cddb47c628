use std::process::ExitCode;

use clap::Parser;
use stringsctl::cli::{ExitStatus, MissingArgs, run_missing};

fn main() -> ExitCode {
    let args = match MissingArgs::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            // --help and --version also come through here
            return if err.use_stderr() {
                ExitStatus::Failure.into()
            } else {
                ExitStatus::Success.into()
            };
        }
    };

    match run_missing(&args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Failure.into()
        }
    }
}
