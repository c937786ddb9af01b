//! Time-signal schedule management on top of the per-user crontab.
//!
//! Components:
//! - `path`: platform-keyed crontab spool location
//! - `store`: read-filter-rewrite operations on the crontab file
//! - `owner`: ownership fix-up after privileged writes
//! - `select`: interactive numbered selection of one entry

pub mod owner;
pub mod path;
pub mod select;
pub mod store;

mod error;

pub use error::ScheduleError;
