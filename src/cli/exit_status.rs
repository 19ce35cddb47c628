use std::process::ExitCode;

/// Exit status for both tools.
///
/// - `Success` (0): Completed, nothing to report (or cleanup finished)
/// - `Failure` (1): Missing keys found, or any fatal error
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
        }
    }
}
