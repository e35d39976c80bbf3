use std::path::PathBuf;

use log::LevelFilter;
use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/folio/config.toml` or `~/.config/folio/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `FOLIO__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub audio: AudioSettings,
    pub ui: UiSettings,
    pub storage: StorageSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Whether the background player is created at all.
    pub enabled: bool,
    /// Whether the player tries to start playing as soon as it is mounted.
    pub autoplay: bool,
    /// Root directory the track sources are resolved against.
    pub assets_dir: PathBuf,
    /// Pause between the end of a track and the start of the next (milliseconds).
    pub advance_delay_ms: u64,
    /// Volume at startup, in `[0, 1]`.
    pub initial_volume: f32,
    /// Volume change applied by the `+` / `-` keys.
    pub volume_step: f32,
    /// Number of seconds to seek when pressing `,` / `.`.
    pub seek_step_seconds: u64,
    /// The playlist, in playback order.
    pub tracks: Vec<TrackSetting>,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            autoplay: true,
            assets_dir: PathBuf::from("public"),
            advance_delay_ms: 1000,
            initial_volume: 0.5,
            volume_step: 0.1,
            seek_step_seconds: 5,
            tracks: default_tracks(),
        }
    }
}

/// One playlist entry; `src` is relative to `audio.assets_dir`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrackSetting {
    pub src: String,
    pub name: String,
}

fn default_tracks() -> Vec<TrackSetting> {
    [
        ("audio/01-first-light.mp3", "First Light"),
        ("audio/02-quiet-compile.mp3", "Quiet Compile"),
        ("audio/03-night-shift.mp3", "Night Shift"),
        ("audio/04-borrowed-time.mp3", "Borrowed Time"),
        ("audio/05-soft-reset.mp3", "Soft Reset"),
        ("audio/06-long-weekend.mp3", "Long Weekend"),
        ("audio/07-slow-river.mp3", "Slow River"),
        ("audio/08-last-commit.mp3", "Last Commit"),
    ]
    .into_iter()
    .map(|(src, name)| TrackSetting {
        src: src.to_string(),
        name: name.to_string(),
    })
    .collect()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// Whether the player control panel starts expanded.
    pub show_control_panel: bool,
    /// How long the event loop waits for input before redrawing (milliseconds).
    pub tick_rate_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " folio ~ software, writing & music ".to_string(),
            show_control_panel: false,
            tick_rate_ms: 50,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// When false, preferences only live for the current session.
    pub enabled: bool,
    /// Overrides the directory holding `prefs.toml`.
    pub data_dir: Option<PathBuf>,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            data_dir: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level used once the terminal UI is running.
    pub level: LogLevelSetting,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevelSetting {
    #[default]
    Off,
    Error,
    #[serde(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelSetting> for LevelFilter {
    fn from(level: LogLevelSetting) -> Self {
        match level {
            LogLevelSetting::Off => LevelFilter::Off,
            LogLevelSetting::Error => LevelFilter::Error,
            LogLevelSetting::Warn => LevelFilter::Warn,
            LogLevelSetting::Info => LevelFilter::Info,
            LogLevelSetting::Debug => LevelFilter::Debug,
            LogLevelSetting::Trace => LevelFilter::Trace,
        }
    }
}
