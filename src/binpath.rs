//! Executable lookup for schedule-entry construction.

use std::env;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// True when `cmd` resolves to an executable on $PATH.
pub fn command_exists(cmd: &str) -> bool {
    find_in_path(cmd).is_some()
}

/// Absolute path to this tool as it should appear in a crontab line.
///
/// $PATH is searched first; a binary installed with `cargo install` but
/// invoked through sudo's stripped environment is picked up from
/// $CARGO_HOME/bin (or ~/.cargo/bin).
pub fn self_path(cmd: &str) -> Option<PathBuf> {
    if let Some(path) = find_in_path(cmd) {
        return Some(path);
    }

    let cargo_bin = env::var_os("CARGO_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".cargo")))?
        .join("bin")
        .join(cmd);
    is_file(&cargo_bin).then_some(cargo_bin)
}

fn find_in_path(cmd: &str) -> Option<PathBuf> {
    let path = env::var_os("PATH")?;
    env::split_paths(&path)
        .map(|dir| dir.join(cmd))
        .find(|candidate| is_executable(candidate))
}

fn is_executable(path: &Path) -> bool {
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

fn is_file(path: &Path) -> bool {
    path.metadata().map(|m| m.is_file()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_a_shell_on_path() {
        assert!(command_exists("sh"));
    }

    #[test]
    fn rejects_unknown_commands() {
        assert!(!command_exists("definitely-no-such-command-here"));
    }
}
