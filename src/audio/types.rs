//! Audio-related small types.
//!
//! This module defines the playlist entry, the volume newtype and the
//! playback state exposed to the UI.

use std::path::PathBuf;
use std::time::Duration;

/// One playlist entry. Tracks are identified by their position in the playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// Source resolved against the asset root.
    pub path: PathBuf,
    /// Name shown in the player.
    pub display: String,
}

/// Coarse lifecycle of the player.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing has tried to play yet.
    #[default]
    Idle,
    Playing,
    Paused,
}

/// Volume level, always within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f32);

impl Volume {
    /// Creates a new volume level, clamping to the valid range. NaN is silence.
    #[must_use]
    pub fn new(volume: f32) -> Self {
        if volume.is_nan() {
            return Self(0.0);
        }
        Self(volume.clamp(0.0, 1.0))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    #[must_use]
    pub fn is_silent(self) -> bool {
        self.0 <= 0.0
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(1.0)
    }
}

/// Everything the UI needs to draw the player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub current_track_index: usize,
    pub is_playing: bool,
    pub volume: Volume,
    pub is_muted: bool,
    /// Position reported by the element; display only.
    pub current_time: Duration,
    /// `None` until the element reports metadata for the current track.
    pub duration: Option<Duration>,
    pub is_control_panel_visible: bool,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            current_track_index: 0,
            is_playing: false,
            volume: Volume::default(),
            is_muted: false,
            current_time: Duration::ZERO,
            duration: None,
            is_control_panel_visible: false,
        }
    }
}

impl PlaybackState {
    /// Playback progress in `[0, 1]`, or `None` while the duration is unknown.
    pub fn progress(&self) -> Option<f64> {
        let total = self.duration?.as_secs_f64();
        if total <= 0.0 {
            return Some(0.0);
        }
        Some((self.current_time.as_secs_f64() / total).clamp(0.0, 1.0))
    }
}
