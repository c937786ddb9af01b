//! Fatal errors surfaced at the top of each flow.
//!
//! Every variant ends up as a single `speaker: <message>` line on stderr
//! followed by exit code 1; the display strings are the user-facing text.

use std::path::PathBuf;

use thiserror::Error;

use crate::schedule::select::SelectError;
use crate::schedule::ScheduleError;
use crate::speech::playback::PlaybackError;
use crate::speech::synth::SynthesisError;
use crate::timespec::TimeFormatError;

#[derive(Debug, Error)]
pub enum SpeakerError {
    #[error("{0} is not supported language")]
    UnsupportedLanguage(String),

    #[error("can't be used --register option and --delete option at same time")]
    ConflictingFlags,

    #[error("MESSAGE is required (see --help)")]
    MissingMessage,

    #[error("can not get data from pipe: {0}")]
    Pipe(#[source] std::io::Error),

    #[error("you need root privileges.")]
    RootRequired,

    #[error("if you use --register option, please install cron command")]
    CronMissing,

    #[error(transparent)]
    TimeFormat(#[from] TimeFormatError),

    #[error("speaker is not found in $PATH and $CARGO_HOME")]
    ExecutableNotFound,

    #[error("can not register time signal: {0}")]
    Register(ScheduleError),

    #[error("can not get delete target from crontab: {0}")]
    ListEntries(ScheduleError),

    #[error("you did not register time signal")]
    NoEntries,

    #[error("can not get your input: {0}")]
    Input(#[from] SelectError),

    #[error("fail to update cron file: {0}")]
    UpdateCron(ScheduleError),

    #[error("can not create audio file: {0}")]
    Synthesis(#[from] SynthesisError),

    #[error("can not make audio file at {}", .0.display())]
    ConvertMp3(PathBuf),

    #[error("can not play audio file: {0}")]
    Playback(#[from] PlaybackError),
}
