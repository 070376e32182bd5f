//! Clip playback backend for the showcase carousel.
//!
//! A [`PlaybackEngine`] owns the audio output stream; one [`ClipPlayer`]
//! per card wraps a sink over the card's soundtrack file. The carousel
//! only ever talks to players through play/pause/rewind/mute, so the
//! exclusive-playback rule lives in carousel state, not here.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

use crate::error::PlaybackError;

/// What a card's media is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Paused at the start
    #[default]
    Stopped,
    Playing,
    /// Paused mid-clip
    Paused,
}

impl PlaybackState {
    pub fn is_playing(self) -> bool {
        matches!(self, PlaybackState::Playing)
    }
}

/// Handle to the audio output device.
///
/// Construction fails when no output device is available; the carousel
/// treats that as "no playback anywhere" and renders its placeholder.
pub struct PlaybackEngine {
    // Dropping the stream kills every sink, so it rides along unused.
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl PlaybackEngine {
    pub fn new() -> Result<Self, PlaybackError> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            handle,
        })
    }

    pub fn open_clip(&self, path: &Path) -> Result<ClipPlayer, PlaybackError> {
        ClipPlayer::load(&self.handle, path)
    }
}

impl std::fmt::Debug for PlaybackEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackEngine").finish_non_exhaustive()
    }
}

/// Playback control over a single clip
pub struct ClipPlayer {
    sink: Sink,
    path: PathBuf,
    muted: bool,
}

impl ClipPlayer {
    fn load(handle: &OutputStreamHandle, path: &Path) -> Result<Self, PlaybackError> {
        let sink = Sink::try_new(handle)?;
        sink.append(decode(path)?);
        sink.pause();
        Ok(Self {
            sink,
            path: path.to_owned(),
            muted: false,
        })
    }

    /// Resume playback; a clip that ran to its end restarts from zero.
    pub fn play(&mut self) -> Result<(), PlaybackError> {
        if self.sink.empty() {
            self.sink.append(decode(&self.path)?);
        }
        self.sink.play();
        Ok(())
    }

    pub fn pause(&self) {
        self.sink.pause();
    }

    /// Rewind to the start, paused.
    pub fn rewind(&mut self) -> Result<(), PlaybackError> {
        self.sink.stop();
        self.sink.append(decode(&self.path)?);
        self.sink.pause();
        Ok(())
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        self.sink.set_volume(if muted { 0.0 } else { 1.0 });
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }
}

impl std::fmt::Debug for ClipPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClipPlayer")
            .field("path", &self.path)
            .field("muted", &self.muted)
            .finish()
    }
}

fn decode(path: &Path) -> Result<Decoder<BufReader<File>>, PlaybackError> {
    let file = File::open(path).map_err(|source| PlaybackError::Open {
        path: path.to_owned(),
        source,
    })?;
    Decoder::new(BufReader::new(file)).map_err(|source| PlaybackError::Decode {
        path: path.to_owned(),
        source,
    })
}
