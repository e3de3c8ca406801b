//! Best-effort execution for row consumers.

use tracing::error;

/// Run a fallible mapping step, logging and discarding its failure.
///
/// Consumers that are allowed to skip a record on bad data use this to keep
/// going without losing the failure from the logs. Steps whose failure must
/// abort the row propagate their `Result` instead.
pub fn try_or_log<T, E, F>(step: F) -> Option<T>
where
    E: std::fmt::Display,
    F: FnOnce() -> Result<T, E>,
{
    match step() {
        Ok(value) => Some(value),
        Err(failure) => {
            error!(%failure, "skipping step after data access failure");
            None
        }
    }
}
