//! MP3 playback through the default audio output.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::{Decoder, OutputStreamBuilder, Sink};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("can not open audio output: {0}")]
    Stream(#[from] rodio::StreamError),

    #[error("can not decode audio: {0}")]
    Decode(#[from] rodio::decoder::DecoderError),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Play an audio file and block until it finishes.
pub fn play(path: &Path) -> Result<(), PlaybackError> {
    let file = File::open(path)?;
    let source = Decoder::new(BufReader::new(file))?;

    // rodio 0.21: OutputStream is the handle, Sink::connect_new takes &Mixer.
    let stream = OutputStreamBuilder::open_default_stream()?;
    let sink = Sink::connect_new(stream.mixer());
    sink.append(source);

    debug!("playing {}", path.display());
    sink.sleep_until_end();

    Ok(())
}
