//! speaker: read text aloud, convert it to mp3, or schedule spoken time
//! signals through cron.

mod binpath;
mod config;
mod error;
mod lang;
mod schedule;
mod speech;
mod timespec;

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use config::Config;
use error::SpeakerError;
use schedule::owner;
use schedule::path::{self, Platform};
use schedule::select::select_entry;
use schedule::store::CrontabStore;
use speech::playback;
use speech::synth::{self, Synthesizer};
use timespec::TimeOfDay;

const CMD_NAME: &str = "speaker";
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "speaker", about = "Read the text aloud")]
struct Cli {
    /// Text to speak; read from stdin when piped and omitted
    message: Option<String>,

    /// Convert text to an mp3 file at the given output path
    #[arg(short, long, value_name = "PATH")]
    mp3: Option<PathBuf>,

    /// Delete a registered time signal
    #[arg(short, long)]
    delete: bool,

    /// Speaking language
    #[arg(short, long, value_name = "CODE")]
    lang: Option<String>,

    /// Register a time signal (e.g. --register=01:20)
    #[arg(short, long, value_name = "HH:MM")]
    register: Option<String>,

    /// Show speaker command version
    #[arg(short = 'v', long)]
    version: bool,

    /// Path to config file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable verbose (debug) logging
    #[arg(long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if cli.version {
        println!("{CMD_NAME} version {VERSION} (under Apache License version 2.0)");
        return ExitCode::SUCCESS;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{CMD_NAME}: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), SpeakerError> {
    let config = Config::load(cli.config.as_deref());

    if cli.register.is_some() && cli.delete {
        return Err(SpeakerError::ConflictingFlags);
    }

    let lang = cli.lang.unwrap_or_else(|| config.default_lang.clone());
    if !lang::is_supported(&lang) {
        return Err(SpeakerError::UnsupportedLanguage(lang));
    }

    let message = match cli.message {
        Some(message) => Some(message),
        None => read_piped_message()?,
    };

    if cli.delete {
        return delete();
    }

    let Some(message) = message else {
        return Err(SpeakerError::MissingMessage);
    };

    if let Some(raw_time) = &cli.register {
        register(&message, raw_time, &lang)
    } else if let Some(out) = &cli.mp3 {
        convert_mp3(&message, out, &lang, &config).await
    } else {
        speak(&message, &lang, &config).await
    }
}

/// Read the message from a pipe. Returns None on an interactive terminal.
fn read_piped_message() -> Result<Option<String>, SpeakerError> {
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }

    let mut buf = String::new();
    stdin
        .read_to_string(&mut buf)
        .map_err(SpeakerError::Pipe)?;
    Ok(Some(buf.replace('\n', "")))
}

/// Append a time-signal entry to the target user's crontab.
fn register(text: &str, raw_time: &str, lang: &str) -> Result<(), SpeakerError> {
    if !owner::is_root() {
        show_sudo_hint(text, raw_time);
        return Err(SpeakerError::RootRequired);
    }
    if !binpath::command_exists("cron") {
        return Err(SpeakerError::CronMissing);
    }

    let time = TimeOfDay::parse(raw_time)?;

    match register_entry(text, &time, lang) {
        Ok(()) => Ok(()),
        Err(e) => {
            show_sudo_hint(text, raw_time);
            eprintln!();
            Err(e)
        }
    }
}

fn register_entry(text: &str, time: &TimeOfDay, lang: &str) -> Result<(), SpeakerError> {
    let user = path::target_user().map_err(SpeakerError::Register)?;
    let platform = Platform::current().map_err(SpeakerError::Register)?;
    let store = CrontabStore::new(platform.crontab_path(&user), CMD_NAME);

    let exe = binpath::self_path(CMD_NAME).ok_or(SpeakerError::ExecutableNotFound)?;
    let line = schedule_line(time, &exe, lang, text);

    store.append(&line).map_err(SpeakerError::Register)?;
    owner::restore(store.path(), &user).map_err(SpeakerError::Register)?;

    info!(
        "registered time signal at {}:{} for {user}",
        time.hour(),
        time.minute()
    );
    Ok(())
}

/// Five-field cron time spec followed by the command invocation.
fn schedule_line(time: &TimeOfDay, exe: &Path, lang: &str, text: &str) -> String {
    format!(
        "{} {} * * * {} --lang={} \"{}\"",
        time.minute(),
        time.hour(),
        exe.display(),
        lang,
        text
    )
}

/// Interactively pick one registered time signal and remove it.
fn delete() -> Result<(), SpeakerError> {
    if !owner::is_root() {
        return Err(SpeakerError::RootRequired);
    }

    let user = path::target_user().map_err(SpeakerError::ListEntries)?;
    let platform = Platform::current().map_err(SpeakerError::ListEntries)?;
    let store = CrontabStore::new(platform.crontab_path(&user), CMD_NAME);

    let entries = store.own_entries().map_err(SpeakerError::ListEntries)?;
    if entries.is_empty() {
        return Err(SpeakerError::NoEntries);
    }

    let stdin = io::stdin();
    let target = select_entry(&entries, stdin.lock(), io::stdout())?.to_string();

    store.remove(&target).map_err(SpeakerError::UpdateCron)?;
    owner::restore(store.path(), &user).map_err(SpeakerError::UpdateCron)?;

    info!("deleted time signal entry for {user}");
    Ok(())
}

/// Synthesize to the path given with --mp3 and leave the file in place.
async fn convert_mp3(
    text: &str,
    out: &Path,
    lang: &str,
    config: &Config,
) -> Result<(), SpeakerError> {
    let (dir, base) =
        mp3_target(out).ok_or_else(|| SpeakerError::ConvertMp3(out.to_path_buf()))?;

    let written = synthesize_to(text, lang, dir, base, config)
        .await
        .map_err(|e| {
            debug!("synthesis failed: {e}");
            SpeakerError::ConvertMp3(out.to_path_buf())
        })?;

    println!("Created mp3 file at {}", written.display());
    Ok(())
}

/// Split an --mp3 output path into the directory and the base name the
/// synthesizer will append ".mp3" to.
fn mp3_target(out: &Path) -> Option<(&Path, &str)> {
    let dir = match out.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let base = match out.extension().and_then(|e| e.to_str()) {
        Some("mp3") => out.file_stem(),
        _ => out.file_name(),
    }?
    .to_str()?;
    Some((dir, base))
}

/// Synthesize into the temp dir, play, then delete the temp file.
async fn speak(text: &str, lang: &str, config: &Config) -> Result<(), SpeakerError> {
    let dir = std::env::temp_dir();
    let base = synth::content_name(text);
    let mp3 = synthesize_to(text, lang, &dir, &base, config).await?;

    let played = playback::play(&mp3);
    if let Err(e) = fs::remove_file(&mp3) {
        debug!("failed to remove temp file {}: {e}", mp3.display());
    }

    played?;
    Ok(())
}

async fn synthesize_to(
    text: &str,
    lang: &str,
    dir: &Path,
    base: &str,
    config: &Config,
) -> Result<PathBuf, SpeakerError> {
    let synthesizer = Synthesizer::new(&config.tts_endpoint)?;
    let path = synthesizer.synthesize(text, lang, dir, base).await?;
    Ok(path)
}

fn show_sudo_hint(text: &str, time: &str) {
    eprintln!("If you installed {CMD_NAME} with cargo install, execute as follows.");
    eprintln!();
    eprintln!("$ sudo -E {CMD_NAME} -r {time} \"{text}\"");
}
