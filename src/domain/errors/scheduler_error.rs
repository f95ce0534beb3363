//! Task scheduling error types.

use thiserror::Error;

/// Reasons a scheduled task produced no output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SchedulerError {
    /// The task was cancelled by its group's failure policy.
    #[error("task was cancelled")]
    Cancelled,

    /// The task panicked or was dropped before reporting a result.
    #[error("task ended without producing a result")]
    Lost,
}
