//! Per-user crontab spool location.

use std::path::PathBuf;

use super::ScheduleError;

/// Platform families with a known crontab spool layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    MacOs,
}

impl Platform {
    /// Detect the running platform; anything without a known spool layout
    /// is an explicit error rather than an empty path.
    pub fn current() -> Result<Self, ScheduleError> {
        match std::env::consts::OS {
            "linux" => Ok(Self::Linux),
            "macos" => Ok(Self::MacOs),
            other => Err(ScheduleError::UnsupportedPlatform(other)),
        }
    }

    /// Crontab spool file for `user`.
    pub fn crontab_path(self, user: &str) -> PathBuf {
        match self {
            Self::Linux => PathBuf::from("/var/spool/cron/crontabs").join(user),
            Self::MacOs => PathBuf::from("/var/at/tabs").join(user),
        }
    }
}

/// The non-root account sudo is acting for.
///
/// Register and delete run as root, so the invoking user has to come from
/// sudo's environment rather than the process credentials.
pub fn target_user() -> Result<String, ScheduleError> {
    match std::env::var("SUDO_USER") {
        Ok(user) if !user.is_empty() => Ok(user),
        _ => Err(ScheduleError::NoTargetUser),
    }
}
