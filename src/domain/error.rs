use thiserror::Error;

/// Rejected session or dial operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("a focus session is already running")]
    AlreadyActive,

    #[error("session length must be between 1 and 120 minutes, got {0}")]
    InvalidDuration(u32),

    #[error("the timer dial is locked while a session is running")]
    DialLocked,
}
