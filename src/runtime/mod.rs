use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::brief;
use crate::content::ContentStore;
use crate::storage::Preferences;

mod cli;
mod event_loop;
mod settings;
mod startup;

pub use settings::init_logging;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::Args::from_env()?;
    if args.help {
        print!("{}", cli::USAGE);
        return Ok(());
    }

    let content = ContentStore::load_embedded()?;

    if let Some(path) = &args.export_brief {
        brief::export(content.proposal(), path)?;
        println!("wrote {}", path.display());
        return Ok(());
    }

    let settings = settings::load_settings();
    let prefs = Preferences::open(&settings.storage);
    if prefs.is_session_only() {
        log::info!("preferences will not be saved after this session");
    }
    let player = if args.no_audio {
        None
    } else {
        startup::build_player(&settings)
    };
    let mut app = startup::build_app(content, prefs, &settings, &args, player);

    settings::apply_log_level(&settings.logging);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    if let Some(player) = app.player.as_mut() {
        player.mount();
    }

    let run_result = event_loop::run(&mut terminal, &settings, &mut app);

    // Stop the music before handing the terminal back.
    drop(app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}

#[cfg(test)]
mod tests;
