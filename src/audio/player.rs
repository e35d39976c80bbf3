//! The background music player.
//!
//! `AudioPlayer` owns one [`MediaElement`] and keeps the playback state the
//! UI draws from. Everything runs on the UI loop: element notifications are
//! drained in [`AudioPlayer::tick`], which also fires the delayed advance to
//! the next track once a track has ended.

use std::time::{Duration, Instant};

use crate::config::{AudioSettings, UiSettings};

use super::element::{MediaElement, MediaEvent};
use super::types::{Phase, PlaybackState, Track, Volume};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerOptions {
    /// Try to start playing on mount.
    pub autoplay: bool,
    /// Gap between the end of one track and the start of the next.
    pub advance_delay: Duration,
    pub initial_volume: f32,
    pub show_control_panel: bool,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            autoplay: true,
            advance_delay: Duration::from_secs(1),
            initial_volume: 1.0,
            show_control_panel: false,
        }
    }
}

impl PlayerOptions {
    pub fn from_settings(audio: &AudioSettings, ui: &UiSettings) -> Self {
        Self {
            autoplay: audio.autoplay,
            advance_delay: Duration::from_millis(audio.advance_delay_ms),
            initial_volume: audio.initial_volume,
            show_control_panel: ui.show_control_panel,
        }
    }
}

pub struct AudioPlayer<E: MediaElement> {
    element: E,
    tracks: Vec<Track>,
    state: PlaybackState,
    phase: Phase,
    options: PlayerOptions,
    pending_advance: Option<Instant>,
    mounted: bool,
}

impl<E: MediaElement> AudioPlayer<E> {
    /// Create a paused player with the first track loaded.
    pub fn new(mut element: E, tracks: Vec<Track>, options: PlayerOptions) -> Self {
        let volume = Volume::new(options.initial_volume);
        element.set_volume(volume.value());
        element.set_muted(false);
        if let Some(first) = tracks.first() {
            element.load(&first.path);
        }

        Self {
            element,
            tracks,
            state: PlaybackState {
                volume,
                is_control_panel_visible: options.show_control_panel,
                ..PlaybackState::default()
            },
            phase: Phase::Idle,
            options,
            pending_advance: None,
            mounted: false,
        }
    }

    /// Called once the player is on screen. Makes a single autoplay attempt;
    /// if playback is refused the player just stays paused.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        if self.options.autoplay {
            self.play();
            if !self.state.is_playing {
                log::debug!("autoplay was not allowed, waiting for the user");
            }
        }
    }

    pub fn toggle_play(&mut self) {
        if self.state.is_playing {
            self.pause();
        } else {
            self.play();
        }
    }

    pub fn play(&mut self) {
        match self.element.play() {
            Ok(()) => {
                self.state.is_playing = true;
                self.phase = Phase::Playing;
            }
            Err(e) => {
                log::debug!("play failed: {e}");
                self.state.is_playing = false;
                self.phase = Phase::Paused;
            }
        }
    }

    pub fn pause(&mut self) {
        self.element.pause();
        self.state.is_playing = false;
        self.phase = Phase::Paused;
    }

    /// Skip forward, wrapping to the first track after the last one.
    pub fn next(&mut self) {
        let n = self.tracks.len();
        if n == 0 {
            return;
        }
        let index = (self.state.current_track_index + 1) % n;
        let resume = self.state.is_playing;
        self.switch_to(index, resume);
    }

    /// Skip back, wrapping to the last track before the first one.
    pub fn previous(&mut self) {
        let n = self.tracks.len();
        if n == 0 {
            return;
        }
        let index = (self.state.current_track_index + n - 1) % n;
        let resume = self.state.is_playing;
        self.switch_to(index, resume);
    }

    pub fn set_volume(&mut self, volume: f32) {
        let volume = Volume::new(volume);
        self.state.volume = volume;
        self.element.set_volume(volume.value());

        if !volume.is_silent() && self.state.is_muted {
            self.state.is_muted = false;
            self.element.set_muted(false);
        }
    }

    /// Nudge the volume by `delta`; the result is clamped like `set_volume`.
    pub fn step_volume(&mut self, delta: f32) {
        self.set_volume(self.state.volume.value() + delta);
    }

    pub fn toggle_mute(&mut self) {
        self.state.is_muted = !self.state.is_muted;
        self.element.set_muted(self.state.is_muted);
    }

    /// Jump to `position`, clamped to the track length once it is known.
    pub fn seek(&mut self, position: Duration) {
        let target = match self.state.duration {
            Some(total) => position.min(total),
            None => position,
        };
        match self.element.seek(target) {
            Ok(()) => self.state.current_time = target,
            Err(e) => log::debug!("seek to {target:?} failed: {e}"),
        }
    }

    pub fn seek_forward(&mut self, step: Duration) {
        self.seek(self.state.current_time.saturating_add(step));
    }

    pub fn seek_back(&mut self, step: Duration) {
        self.seek(self.state.current_time.saturating_sub(step));
    }

    pub fn toggle_panel(&mut self) {
        self.state.is_control_panel_visible = !self.state.is_control_panel_visible;
    }

    pub fn handle_event(&mut self, event: MediaEvent, now: Instant) {
        match event {
            MediaEvent::LoadedMetadata(total) => self.state.duration = Some(total),
            MediaEvent::TimeUpdate(position) => self.state.current_time = position,
            MediaEvent::Ended => {
                self.pending_advance = Some(now + self.options.advance_delay);
            }
        }
    }

    /// Drain element events and run the scheduled advance when it is due.
    pub fn tick(&mut self, now: Instant) {
        for event in self.element.poll_events() {
            self.handle_event(event, now);
        }

        if let Some(due) = self.pending_advance {
            if now >= due {
                self.pending_advance = None;
                let n = self.tracks.len();
                if n > 0 {
                    let index = (self.state.current_track_index + 1) % n;
                    self.switch_to(index, true);
                }
            }
        }
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.tracks.get(self.state.current_track_index)
    }

    pub fn pending_advance(&self) -> Option<Instant> {
        self.pending_advance
    }

    #[cfg(test)]
    pub fn element(&self) -> &E {
        &self.element
    }

    fn switch_to(&mut self, index: usize, resume: bool) {
        self.pending_advance = None;
        self.state.current_track_index = index;
        self.state.current_time = Duration::ZERO;
        self.state.duration = None;

        if let Some(track) = self.tracks.get(index) {
            self.element.load(&track.path);
        }
        if resume {
            self.play();
        }
    }
}

impl<E: MediaElement> Drop for AudioPlayer<E> {
    fn drop(&mut self) {
        self.pending_advance = None;
        self.element.pause();
    }
}
