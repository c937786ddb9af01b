//! Crontab file ownership fix-up after privileged writes.
//!
//! Register and delete run as root through sudo, so a freshly written spool
//! file belongs to root until it is handed back to the target user and the
//! crontab group.

use std::ffi::CString;
use std::path::Path;

use tracing::debug;

use super::ScheduleError;

/// Group that owns crontab spool files on the supported platforms.
const CRONTAB_GROUP: &str = "crontab";

/// True when running with root privileges.
pub fn is_root() -> bool {
    // SAFETY: geteuid has no failure modes and touches no memory.
    unsafe { libc::geteuid() == 0 }
}

/// Hand the spool file back to `user` and the crontab group.
///
/// Not transactional with the write that preceded it: a lookup or chown
/// failure leaves the written content in place and is reported as an error.
pub fn restore(path: &Path, user: &str) -> Result<(), ScheduleError> {
    let uid = lookup_uid(user)?;
    let gid = lookup_gid(CRONTAB_GROUP)?;
    std::os::unix::fs::chown(path, Some(uid), Some(gid))?;

    debug!("changed owner of {} to {uid}:{gid}", path.display());
    Ok(())
}

/// Resolve a user by numeric id first, then by name.
pub fn lookup_uid(user: &str) -> Result<u32, ScheduleError> {
    if let Ok(uid) = user.parse::<u32>() {
        // SAFETY: getpwuid returns a pointer into static storage or null;
        // we only test it for null here.
        if !unsafe { libc::getpwuid(uid) }.is_null() {
            return Ok(uid);
        }
    }

    let name = CString::new(user).map_err(|_| ScheduleError::UnknownUser(user.to_string()))?;
    // SAFETY: name outlives the call; the returned pointer is only
    // dereferenced after the null check.
    let pw = unsafe { libc::getpwnam(name.as_ptr()) };
    if pw.is_null() {
        return Err(ScheduleError::UnknownUser(user.to_string()));
    }
    Ok(unsafe { (*pw).pw_uid })
}

/// Resolve a group by numeric id first, then by name.
pub fn lookup_gid(group: &str) -> Result<u32, ScheduleError> {
    if let Ok(gid) = group.parse::<u32>() {
        // SAFETY: as in lookup_uid.
        if !unsafe { libc::getgrgid(gid) }.is_null() {
            return Ok(gid);
        }
    }

    let name = CString::new(group).map_err(|_| ScheduleError::UnknownGroup(group.to_string()))?;
    // SAFETY: as in lookup_uid.
    let gr = unsafe { libc::getgrnam(name.as_ptr()) };
    if gr.is_null() {
        return Err(ScheduleError::UnknownGroup(group.to_string()));
    }
    Ok(unsafe { (*gr).gr_gid })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_resolves_to_uid_zero() {
        assert_eq!(lookup_uid("root").unwrap(), 0);
        assert_eq!(lookup_uid("0").unwrap(), 0);
    }

    #[test]
    fn unknown_user_is_an_error() {
        assert!(matches!(
            lookup_uid("no-such-user-here"),
            Err(ScheduleError::UnknownUser(_))
        ));
    }

    #[test]
    fn unknown_group_is_an_error() {
        assert!(matches!(
            lookup_gid("no-such-group-here"),
            Err(ScheduleError::UnknownGroup(_))
        ));
    }

    #[test]
    fn embedded_nul_does_not_panic() {
        assert!(lookup_uid("na\0me").is_err());
    }
}
