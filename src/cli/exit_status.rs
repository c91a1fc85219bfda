use std::process::ExitCode;

/// Exit status for the CLI, following the `diff(1)` convention.
///
/// - `Success` (0): Inputs compared, no differences found
/// - `Failure` (1): Inputs compared, differences found
/// - `Error` (2): Command failed (unreadable input, bad config, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Inputs compared, no differences found.
    Success,
    /// Inputs compared, differences found.
    Failure,
    /// Command failed before a comparison could be produced.
    Error,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
