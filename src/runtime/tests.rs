use std::ffi::OsString;
use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{Level, LevelFilter, Log, Metadata};

use super::cli::{Args, CliError};
use super::event_loop::handle_key_event;
use super::settings::{build_logger, tui_level};
use super::startup::{build_app, build_player};
use crate::app::{App, Page, Player};
use crate::audio::{AudioPlayer, MediaElement, PlayerOptions, Track};
use crate::config::{AudioSettings, LogLevelSetting, LoggingSettings, Settings};
use crate::content::{ContentStore, Language};
use crate::route::Route;
use crate::storage::{LANGUAGE_KEY, MemoryStorage, Preferences, THEME_KEY};
use crate::test_utils::{EnvGuard, SilentElement, env_lock};

fn args(list: &[&str]) -> Result<Args, CliError> {
    Args::from_vec(list.iter().map(OsString::from).collect())
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn player() -> Player {
    let tracks = (0..3)
        .map(|i| Track {
            path: PathBuf::from(format!("{i}.mp3")),
            display: format!("Track {i}"),
        })
        .collect();
    let element: Box<dyn MediaElement> = Box::new(SilentElement);
    AudioPlayer::new(
        element,
        tracks,
        PlayerOptions {
            autoplay: false,
            initial_volume: 0.5,
            ..PlayerOptions::default()
        },
    )
}

fn app_for(list: &[&str], mut prefs: Preferences) -> App {
    // A stored theme keeps the system color scheme out of the tests.
    prefs.set(THEME_KEY, "dark");
    let content = ContentStore::load_embedded().expect("embedded content is valid");
    let args = args(list).expect("valid arguments");
    build_app(content, prefs, &Settings::default(), &args, Some(player()))
}

#[test]
fn parses_flags_and_route() {
    let parsed = args(&[
        "--lang",
        "es",
        "--no-audio",
        "--export-brief",
        "out/brief.md",
        "/blog",
    ])
    .expect("valid arguments");
    assert_eq!(parsed.lang, Some(Language::Es));
    assert!(parsed.no_audio);
    assert_eq!(parsed.export_brief, Some(PathBuf::from("out/brief.md")));
    assert_eq!(parsed.route.as_deref(), Some("/blog"));
    assert!(!parsed.help);
}

#[test]
fn rejects_unsupported_language_and_extra_arguments() {
    assert!(args(&["--lang", "fr"]).is_err());
    assert!(matches!(
        args(&["/blog", "/brief"]),
        Err(CliError::Unexpected(_))
    ));
}

#[test]
fn post_flag_overrides_route_and_keeps_its_language() {
    let parsed = args(&["--post", "hello", "/blog?post=other&lang=es"]).expect("valid arguments");
    assert_eq!(
        parsed.route(),
        Route::Blog {
            post: Some("hello".into()),
            lang: Some(Language::Es),
        }
    );
    assert_eq!(parsed.explicit_lang(), Some(Language::Es));

    let parsed = args(&["--lang", "en", "/blog?lang=es"]).expect("valid arguments");
    assert_eq!(parsed.explicit_lang(), Some(Language::En));
}

#[test]
fn no_arguments_open_home() {
    let parsed = args(&[]).expect("valid arguments");
    assert_eq!(parsed, Args::default());
    assert_eq!(parsed.route(), Route::Home);
}

#[test]
fn explicit_language_overrides_stored_spanish() {
    let stored = Preferences::new(MemoryStorage::default().with(LANGUAGE_KEY, "es"));
    let app = app_for(
        &["/blog?post=bilingual-content-without-tears&lang=en"],
        stored,
    );
    assert_eq!(app.lang(), Language::En);
    assert_eq!(
        app.page,
        Page::Post("bilingual-content-without-tears".into())
    );
    assert_eq!(app.prefs.get(LANGUAGE_KEY).as_deref(), Some("en"));
}

#[test]
fn lang_flag_beats_the_route_language() {
    let parsed = args(&["--lang", "en", "/blog?post=hello&lang=es"]).expect("valid arguments");
    assert_eq!(
        parsed.route(),
        Route::Blog {
            post: Some("hello".into()),
            lang: Some(Language::En),
        }
    );

    let app = app_for(&["--lang", "en", "/blog?lang=es"], Preferences::session_only());
    assert_eq!(app.lang(), Language::En);
    assert_eq!(app.page, Page::Blog);
    assert_eq!(app.prefs.get(LANGUAGE_KEY).as_deref(), Some("en"));
}

#[test]
fn stored_language_applies_without_explicit_choice() {
    let stored = Preferences::new(MemoryStorage::default().with(LANGUAGE_KEY, "es"));
    let app = app_for(&["/blog"], stored);
    assert_eq!(app.lang(), Language::Es);
}

#[test]
fn unknown_post_from_cli_shows_not_found() {
    let mut app = app_for(&["--post", "nope"], Preferences::session_only());
    assert_eq!(app.page, Page::NotFound("nope".into()));
    assert!(!handle_key_event(key(KeyCode::Esc), &AudioSettings::default(), &mut app));
    assert_eq!(app.page, Page::Blog);
}

#[test]
fn navigation_keys_drive_pages() {
    let audio = AudioSettings::default();
    let mut app = app_for(&[], Preferences::session_only());

    handle_key_event(key(KeyCode::Char('2')), &audio, &mut app);
    assert_eq!(app.page, Page::Blog);
    handle_key_event(key(KeyCode::Char('j')), &audio, &mut app);
    handle_key_event(key(KeyCode::Enter), &audio, &mut app);
    assert_eq!(
        app.page,
        Page::Post("bilingual-content-without-tears".into())
    );

    handle_key_event(key(KeyCode::Char('j')), &audio, &mut app);
    assert_eq!(app.scroll, 1);

    handle_key_event(key(KeyCode::Char('L')), &audio, &mut app);
    assert_eq!(app.lang(), Language::Es);

    handle_key_event(key(KeyCode::Char('3')), &audio, &mut app);
    assert_eq!(app.page, Page::Brief);
    handle_key_event(key(KeyCode::Char('1')), &audio, &mut app);
    assert_eq!(app.page, Page::Home);
}

#[test]
fn player_keys_reach_the_player() {
    let audio = AudioSettings::default();
    let mut app = app_for(&[], Preferences::session_only());

    handle_key_event(key(KeyCode::Char(' ')), &audio, &mut app);
    handle_key_event(key(KeyCode::Char('p')), &audio, &mut app);
    handle_key_event(key(KeyCode::Char('+')), &audio, &mut app);
    handle_key_event(key(KeyCode::Char('a')), &audio, &mut app);

    let state = app.player.as_ref().map(|p| p.state().clone()).expect("player");
    assert!(state.is_playing);
    assert_eq!(state.current_track_index, 2);
    assert!((state.volume.value() - 0.6).abs() < 1e-6);
    assert!(state.is_control_panel_visible);

    handle_key_event(key(KeyCode::Char('m')), &audio, &mut app);
    assert!(app.player.as_ref().is_some_and(|p| p.state().is_muted));
}

#[test]
fn quit_keys() {
    let audio = AudioSettings::default();
    let mut app = app_for(&[], Preferences::session_only());
    assert!(handle_key_event(key(KeyCode::Char('q')), &audio, &mut app));
    assert!(handle_key_event(
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        &audio,
        &mut app
    ));
    assert!(!handle_key_event(key(KeyCode::Char('c')), &audio, &mut app));
}

#[test]
fn player_is_skipped_when_disabled_or_empty() {
    let mut settings = Settings::default();
    settings.audio.enabled = false;
    assert!(build_player(&settings).is_none());

    let mut settings = Settings::default();
    settings.audio.tracks.clear();
    assert!(build_player(&settings).is_none());
}

#[test]
fn configured_level_can_raise_logging_above_startup() {
    let _lock = env_lock();
    let _env = EnvGuard::remove("RUST_LOG");

    let logger = build_logger();
    let debug = Metadata::builder().level(Level::Debug).target("folio").build();
    let trace = Metadata::builder().level(Level::Trace).target("folio").build();
    assert!(logger.enabled(&debug));
    assert!(logger.enabled(&trace));

    let logging = LoggingSettings {
        level: LogLevelSetting::Debug,
    };
    assert_eq!(tui_level(&logging, false), Some(LevelFilter::Debug));
    assert_eq!(tui_level(&LoggingSettings::default(), false), Some(LevelFilter::Off));
}

#[test]
fn rust_log_takes_precedence_over_configured_level() {
    let _lock = env_lock();
    let _env = EnvGuard::set("RUST_LOG", "info");

    let logger = build_logger();
    let info = Metadata::builder().level(Level::Info).target("folio").build();
    let debug = Metadata::builder().level(Level::Debug).target("folio").build();
    assert!(logger.enabled(&info));
    assert!(!logger.enabled(&debug));

    let logging = LoggingSettings {
        level: LogLevelSetting::Trace,
    };
    assert_eq!(tui_level(&logging, true), None);
}
