use log::LevelFilter;
use simple_logger::SimpleLogger;

use crate::config;

pub fn load_settings() -> config::Settings {
    match config::Settings::load() {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                log::warn!("invalid config, using defaults: {msg}");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Config is optional; failures should not prevent the app from starting.
            log::warn!("failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    }
}

/// Ceiling while the terminal is still in normal mode.
const STARTUP_LEVEL: LevelFilter = LevelFilter::Warn;

/// The process logger writes to stderr and lets every level through, so
/// `log::set_max_level` alone decides what is emitted. `RUST_LOG` replaces
/// the default level.
pub(super) fn build_logger() -> SimpleLogger {
    SimpleLogger::new().with_level(LevelFilter::Trace).env()
}

pub fn init_logging() -> Result<(), log::SetLoggerError> {
    build_logger().init()?;
    if std::env::var_os("RUST_LOG").is_none() {
        log::set_max_level(STARTUP_LEVEL);
    }
    Ok(())
}

/// Level for the lifetime of the TUI, or `None` when `RUST_LOG` is in charge.
pub(super) fn tui_level(
    logging: &config::LoggingSettings,
    rust_log_set: bool,
) -> Option<LevelFilter> {
    (!rust_log_set).then(|| LevelFilter::from(logging.level))
}

/// Switch to the configured level (off by default) before the alternate
/// screen is entered; stderr output would land on top of it.
pub fn apply_log_level(logging: &config::LoggingSettings) {
    if let Some(level) = tui_level(logging, std::env::var_os("RUST_LOG").is_some()) {
        log::set_max_level(level);
    }
}
