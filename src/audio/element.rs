//! The media element seam.
//!
//! The player never touches audio hardware directly: it drives one
//! [`MediaElement`] and reacts to the [`MediaEvent`]s it reports.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Notifications reported by a media element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    /// The length of the current source became known.
    LoadedMetadata(Duration),
    /// The playback position moved.
    TimeUpdate(Duration),
    /// The current source played to its end.
    Ended,
}

#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    /// Playback is not allowed right now, e.g. no output device.
    #[error("playback not allowed: {0}")]
    NotAllowed(String),
    #[error("failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {path:?}: {reason}")]
    Decode { path: PathBuf, reason: String },
    #[error("no source loaded")]
    NoSource,
}

/// A single audio output, modelled on the browser media element.
pub trait MediaElement {
    /// Point the element at a new source. Loading problems surface on `play`.
    fn load(&mut self, path: &Path);
    /// Start or resume playback.
    fn play(&mut self) -> Result<(), MediaError>;
    fn pause(&mut self);
    fn set_volume(&mut self, volume: f32);
    fn set_muted(&mut self, muted: bool);
    /// Jump to `position` within the current source.
    fn seek(&mut self, position: Duration) -> Result<(), MediaError>;
    /// Drain the events that happened since the last call.
    fn poll_events(&mut self) -> Vec<MediaEvent>;
}

impl<T: MediaElement + ?Sized> MediaElement for Box<T> {
    fn load(&mut self, path: &Path) {
        (**self).load(path)
    }

    fn play(&mut self) -> Result<(), MediaError> {
        (**self).play()
    }

    fn pause(&mut self) {
        (**self).pause()
    }

    fn set_volume(&mut self, volume: f32) {
        (**self).set_volume(volume)
    }

    fn set_muted(&mut self, muted: bool) {
        (**self).set_muted(muted)
    }

    fn seek(&mut self, position: Duration) -> Result<(), MediaError> {
        (**self).seek(position)
    }

    fn poll_events(&mut self) -> Vec<MediaEvent> {
        (**self).poll_events()
    }
}
