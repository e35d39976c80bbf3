use crate::app::{App, Player};
use crate::audio::{AudioPlayer, MediaElement, PlayerOptions, RodioElement, build_playlist};
use crate::config;
use crate::content::ContentStore;
use crate::storage::Preferences;
use crate::theme::{ThemeToggle, detect_system_theme};

use super::cli::Args;

/// Build the background player from the `audio` settings, or `None` when
/// audio is disabled or the playlist is empty.
pub fn build_player(settings: &config::Settings) -> Option<Player> {
    if !settings.audio.enabled {
        log::info!("background audio disabled in config");
        return None;
    }

    let tracks = build_playlist(&settings.audio);
    if tracks.is_empty() {
        log::info!("playlist is empty, not starting the player");
        return None;
    }
    for track in tracks.iter().filter(|t| !t.path.is_file()) {
        log::warn!("track `{}` not found at {:?}", track.display, track.path);
    }

    let element: Box<dyn MediaElement> = Box::new(RodioElement::new());
    Some(AudioPlayer::new(
        element,
        tracks,
        PlayerOptions::from_settings(&settings.audio, &settings.ui),
    ))
}

/// Assemble the application model: preferences, theme, language, the
/// initial page and (unless disabled) the player.
pub fn build_app(
    content: ContentStore,
    prefs: Preferences,
    settings: &config::Settings,
    args: &Args,
    player: Option<Player>,
) -> App {
    let theme = ThemeToggle::init(&prefs, detect_system_theme);
    let mut app = App::new(content, prefs, theme, args.explicit_lang())
        .with_header_text(settings.ui.header_text.clone());
    if let Some(player) = player {
        app = app.with_player(player);
    }
    app.navigate(&args.route());
    app
}
