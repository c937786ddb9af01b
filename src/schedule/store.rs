//! Crontab read-filter-rewrite operations.
//!
//! The crontab file is shared with foreign entries the user or other tools
//! wrote; those lines must survive every rewrite byte-for-byte, so lines are
//! carried around with their terminators intact. There is no file locking:
//! concurrent rewrites race and the last writer wins.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::ScheduleError;

/// Crontab spool files are private to their user.
const CRONTAB_MODE: u32 = 0o600;

pub struct CrontabStore {
    path: PathBuf,
    tag: String,
}

impl CrontabStore {
    /// `tag` marks which lines belong to this tool; everything else in the
    /// file is foreign and untouchable.
    pub fn new(path: impl Into<PathBuf>, tag: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            tag: tag.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lines belonging to this tool, in file order, terminators included.
    pub fn own_entries(&self) -> Result<Vec<String>, ScheduleError> {
        Ok(self
            .read_lines()?
            .into_iter()
            .filter(|line| line.contains(&self.tag))
            .collect())
    }

    /// Append one schedule line, creating the file (mode 0600) if absent.
    pub fn append(&self, line: &str) -> Result<(), ScheduleError> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .mode(CRONTAB_MODE)
            .open(&self.path)?;
        writeln!(file, "{line}")?;

        debug!("appended schedule line to {}", self.path.display());
        Ok(())
    }

    /// Rewrite the file without the lines exactly equal to `target`.
    ///
    /// This is a destructive recreate, not an in-place edit: between the
    /// read and the rewrite the previous content exists only in memory, so
    /// the step has to run to completion.
    pub fn remove(&self, target: &str) -> Result<(), ScheduleError> {
        let lines = self.read_lines()?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(CRONTAB_MODE)
            .open(&self.path)?;
        for line in lines.iter().filter(|line| line.as_str() != target) {
            file.write_all(line.as_bytes())?;
        }
        file.flush()?;

        debug!("rewrote {}", self.path.display());
        Ok(())
    }

    /// All lines of the file with their terminators preserved, so that
    /// writing them back unchanged reproduces the file byte-for-byte.
    fn read_lines(&self) -> Result<Vec<String>, ScheduleError> {
        let contents = fs::read_to_string(&self.path)?;
        Ok(contents.split_inclusive('\n').map(str::to_string).collect())
    }
}
