use std::process::ExitCode;

/// Exit status of a `pyxplod` run.
///
/// - `Success` (0): The run completed. Per-file failures are reported in the
///   summary but do not change the status.
/// - `Error` (2): The run was aborted before processing (bad paths, invalid
///   config, worker pool failure).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// The run completed.
    Success,
    /// The run was aborted by a configuration or environment error.
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
