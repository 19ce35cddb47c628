use std::process::ExitCode;

use clap::Parser;
use stringsctl::cli::{CleanArgs, ExitStatus, run_clean};

fn main() -> ExitCode {
    let args = match CleanArgs::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitStatus::Failure.into()
            } else {
                ExitStatus::Success.into()
            };
        }
    };

    match run_clean(&args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Failure.into()
        }
    }
}
