//! Speech synthesis and playback collaborators.
//!
//! Both are opaque to the rest of the program:
//! - `synth`: translate TTS endpoint fetch → MP3 file on disk
//! - `playback`: rodio decode + blocking sink playback

pub mod playback;
pub mod synth;
