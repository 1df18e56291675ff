use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed; per-file warnings do not change this
/// - `Error` (2): Command failed (config error, unreadable dictionary, write failure)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
