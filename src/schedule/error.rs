//! Error types for crontab operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(&'static str),

    #[error("SUDO_USER is not set; run through sudo -E")]
    NoTargetUser,

    #[error("unknown user: {0}")]
    UnknownUser(String),

    #[error("unknown group: {0}")]
    UnknownGroup(String),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
