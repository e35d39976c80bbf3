use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, Page, Player};
use crate::config;
use crate::route::Route;
use crate::ui;

/// Main terminal event loop: advances the player, draws, and handles input.
/// Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    let tick_rate = Duration::from_millis(settings.ui.tick_rate_ms);

    loop {
        if let Some(player) = app.player.as_mut() {
            player.tick(Instant::now());
        }

        terminal.draw(|f| ui::draw(f, app, settings.audio.seek_step_seconds))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, &settings.audio, app) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Apply one key press to `app`. Returns `true` when the user asked to quit.
pub fn handle_key_event(key: KeyEvent, audio: &config::AudioSettings, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,

        KeyCode::Char('1') => app.navigate(&Route::Home),
        KeyCode::Char('2') | KeyCode::Char('b') => app.navigate(&Route::Blog {
            post: None,
            lang: None,
        }),
        KeyCode::Char('3') => app.navigate(&Route::Brief),

        KeyCode::Char('j') | KeyCode::Down => {
            if app.page == Page::Blog {
                app.select_next();
            } else {
                app.scroll_down();
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if app.page == Page::Blog {
                app.select_prev();
            } else {
                app.scroll_up();
            }
        }
        KeyCode::Enter => {
            if app.page == Page::Blog {
                app.open_selected();
            }
        }
        KeyCode::Esc | KeyCode::Backspace => app.back(),

        KeyCode::Char('t') => {
            let theme = app.toggle_theme();
            log::debug!("theme switched to {}", theme.as_str());
        }
        KeyCode::Char('L') => {
            let lang = app.toggle_language();
            log::debug!("blog language switched to {lang}");
        }

        code => {
            if let Some(player) = app.player.as_mut() {
                let seek_step = Duration::from_secs(audio.seek_step_seconds);
                match code {
                    KeyCode::Char(' ') => player.toggle_play(),
                    KeyCode::Char('n') => {
                        player.next();
                        log_track(player);
                    }
                    KeyCode::Char('p') => {
                        player.previous();
                        log_track(player);
                    }
                    KeyCode::Char('+') | KeyCode::Char('=') => player.step_volume(audio.volume_step),
                    KeyCode::Char('-') => player.step_volume(-audio.volume_step),
                    KeyCode::Char('m') => player.toggle_mute(),
                    KeyCode::Char(',') => player.seek_back(seek_step),
                    KeyCode::Char('.') => player.seek_forward(seek_step),
                    KeyCode::Char('a') => player.toggle_panel(),
                    _ => {}
                }
            }
        }
    }

    false
}

fn log_track(player: &Player) {
    if let Some(track) = player.current_track() {
        log::debug!("switched to `{}`", track.display);
    }
}
