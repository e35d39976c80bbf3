use crate::config::AudioSettings;

use super::types::Track;

/// Resolve the configured playlist against the asset root, keeping its order.
///
/// Sources may be written web-style (`/audio/x.mp3`); the leading slash is
/// treated as the asset root rather than the filesystem root.
pub fn build_playlist(settings: &AudioSettings) -> Vec<Track> {
    settings
        .tracks
        .iter()
        .map(|t| Track {
            path: settings.assets_dir.join(t.src.trim_start_matches('/')),
            display: t.name.clone(),
        })
        .collect()
}
