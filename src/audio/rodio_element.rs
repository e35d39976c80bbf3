//! A [`MediaElement`] backed by a `rodio` sink.
//!
//! The output stream is opened lazily on the first play, so a machine without
//! an audio device only fails when playback is actually requested.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use lofty::prelude::*;
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};

use super::element::{MediaElement, MediaError, MediaEvent};

#[derive(Default)]
pub struct RodioElement {
    stream: Option<OutputStream>,
    sink: Option<Sink>,
    source: Option<PathBuf>,
    volume: f32,
    muted: bool,
    /// Position the current sink started at; `Sink::get_pos` is relative to it.
    offset: Duration,
    last_pos: Duration,
    started: bool,
    ended: bool,
    metadata_sent: bool,
    events: Vec<MediaEvent>,
}

impl RodioElement {
    pub fn new() -> Self {
        let mut element = Self::default();
        element.volume = 1.0;
        element
    }

    fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.volume }
    }

    /// Build a paused sink for the current source starting at `start_at`.
    fn rebuild_sink(&mut self, start_at: Duration) -> Result<(), MediaError> {
        let path = self.source.clone().ok_or(MediaError::NoSource)?;
        let stream = open_stream(&mut self.stream)?;
        let (sink, total) = create_sink_at(stream, &path, start_at)?;
        sink.set_volume(self.effective_volume());

        if let Some(old) = self.sink.replace(sink) {
            old.stop();
        }
        if !self.metadata_sent {
            if let Some(total) = total {
                self.events.push(MediaEvent::LoadedMetadata(total));
                self.metadata_sent = true;
            }
        }
        self.offset = start_at;
        self.last_pos = start_at;
        self.ended = false;
        Ok(())
    }
}

impl MediaElement for RodioElement {
    fn load(&mut self, path: &Path) {
        if let Some(old) = self.sink.take() {
            old.stop();
        }
        // Anything still queued belongs to the previous source.
        self.events.clear();
        self.source = Some(path.to_path_buf());
        self.offset = Duration::ZERO;
        self.last_pos = Duration::ZERO;
        self.started = false;
        self.ended = false;
        self.metadata_sent = false;

        if let Some(total) = tag_duration(path) {
            self.events.push(MediaEvent::LoadedMetadata(total));
            self.metadata_sent = true;
        }
    }

    fn play(&mut self) -> Result<(), MediaError> {
        // A finished source restarts from the beginning.
        if self.sink.is_none() || self.ended {
            self.rebuild_sink(Duration::ZERO)?;
        }
        if let Some(sink) = &self.sink {
            sink.play();
        }
        self.started = true;
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(sink) = &self.sink {
            sink.pause();
        }
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        if let Some(sink) = &self.sink {
            sink.set_volume(self.effective_volume());
        }
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        if let Some(sink) = &self.sink {
            sink.set_volume(self.effective_volume());
        }
    }

    fn seek(&mut self, position: Duration) -> Result<(), MediaError> {
        // Scrubbing rebuilds the sink and skips into the file.
        let was_playing = self.sink.as_ref().is_some_and(|s| !s.is_paused());
        self.rebuild_sink(position)?;
        if was_playing {
            if let Some(sink) = &self.sink {
                sink.play();
            }
        }
        self.events.push(MediaEvent::TimeUpdate(position));
        Ok(())
    }

    fn poll_events(&mut self) -> Vec<MediaEvent> {
        if let Some(sink) = &self.sink {
            let pos = self.offset + sink.get_pos();
            if pos != self.last_pos {
                self.last_pos = pos;
                self.events.push(MediaEvent::TimeUpdate(pos));
            }
            if self.started && !self.ended && sink.empty() {
                self.ended = true;
                self.events.push(MediaEvent::Ended);
            }
        }
        std::mem::take(&mut self.events)
    }
}

impl Drop for RodioElement {
    fn drop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }
}

fn open_stream(slot: &mut Option<OutputStream>) -> Result<&OutputStream, MediaError> {
    if slot.is_none() {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| MediaError::NotAllowed(e.to_string()))?;
        // rodio logs to stderr when OutputStream is dropped, which would
        // scribble over the TUI.
        stream.log_on_drop(false);
        *slot = Some(stream);
    }
    slot.as_ref()
        .ok_or_else(|| MediaError::NotAllowed("no output stream".to_string()))
}

/// Create a paused `Sink` for `path` that starts playback at `start_at`.
fn create_sink_at(
    stream: &OutputStream,
    path: &Path,
    start_at: Duration,
) -> Result<(Sink, Option<Duration>), MediaError> {
    let file = File::open(path).map_err(|source| MediaError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let decoder = Decoder::new(BufReader::new(file)).map_err(|e| MediaError::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let total = decoder.total_duration();

    let sink = Sink::connect_new(stream.mixer());
    // `skip_duration` is our seeking primitive; even Duration::ZERO is fine.
    sink.append(decoder.skip_duration(start_at));
    sink.pause();
    Ok((sink, total))
}

/// Read the track length from its tags without decoding audio.
fn tag_duration(path: &Path) -> Option<Duration> {
    lofty::read_from_path(path)
        .ok()
        .map(|tagged| tagged.properties().duration())
        .filter(|d| !d.is_zero())
}
