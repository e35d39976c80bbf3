use std::{env, path::PathBuf};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` tries environment variables first (prefix `FOLIO__`), then an
/// optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("FOLIO")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.audio.initial_volume) {
            return Err("audio.initial_volume must be between 0 and 1".to_string());
        }
        if !(self.audio.volume_step > 0.0 && self.audio.volume_step <= 1.0) {
            return Err("audio.volume_step must be in (0, 1]".to_string());
        }
        if let Some(t) = self.audio.tracks.iter().find(|t| t.src.trim().is_empty()) {
            return Err(format!("audio.tracks entry `{}` has an empty src", t.name));
        }
        if self.ui.tick_rate_ms == 0 {
            return Err("ui.tick_rate_ms must be >= 1".to_string());
        }
        Ok(())
    }
}

/// Resolve the config path from `FOLIO_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("FOLIO_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/folio/config.toml`
/// or `~/.config/folio/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("folio").join("config.toml"))
}

/// Directory holding persisted preferences: `$FOLIO_DATA_DIR`, then
/// `$XDG_DATA_HOME/folio`, then `~/.local/share/folio`.
pub fn default_data_dir() -> Option<PathBuf> {
    if let Some(p) = env::var_os("FOLIO_DATA_DIR").filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(p));
    }

    let data_home = if let Some(xdg) = env::var_os("XDG_DATA_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".local").join("share"))
    };

    data_home.map(|d| d.join("folio"))
}
