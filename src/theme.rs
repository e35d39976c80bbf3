//! Light/dark theme preference.
//!
//! The chosen theme is mirrored in three places: the in-memory [`ThemeToggle`],
//! the [`Palette`] everything is drawn with, and the `theme` preference key.

use ratatui::style::Color;

use crate::storage::{Preferences, THEME_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Value written to the preference store.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value; anything but `light`/`dark` is ignored.
    pub fn from_stored(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette::light(),
            Theme::Dark => Palette::dark(),
        }
    }
}

/// Detect the operating system color scheme, defaulting to dark when it
/// cannot be determined.
pub fn detect_system_theme() -> Theme {
    if let Ok(dark_light::Mode::Light) = dark_light::detect() {
        Theme::Light
    } else {
        Theme::Dark
    }
}

/// Colors used by the terminal UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub highlight: Color,
    pub border: Color,
    pub code: Color,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            background: Color::Rgb(250, 250, 247),
            text: Color::Rgb(30, 30, 36),
            muted: Color::Rgb(110, 110, 120),
            accent: Color::Rgb(37, 99, 235),
            highlight: Color::Rgb(219, 234, 254),
            border: Color::Rgb(200, 200, 210),
            code: Color::Rgb(157, 23, 77),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(17, 17, 22),
            text: Color::Rgb(235, 235, 240),
            muted: Color::Rgb(150, 150, 165),
            accent: Color::Rgb(96, 165, 250),
            highlight: Color::Rgb(30, 41, 59),
            border: Color::Rgb(63, 63, 80),
            code: Color::Rgb(244, 114, 182),
        }
    }
}

/// Two-state theme toggle backed by the preference store.
#[derive(Debug, Clone, Copy)]
pub struct ThemeToggle {
    theme: Theme,
}

impl ThemeToggle {
    /// Resolve the initial theme: stored preference first, then the system
    /// color scheme reported by `system`.
    pub fn init(prefs: &Preferences, system: impl FnOnce() -> Theme) -> Self {
        let stored = prefs.get(THEME_KEY).and_then(|v| Theme::from_stored(&v));
        Self {
            theme: stored.unwrap_or_else(system),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip the theme and persist the new value.
    pub fn toggle(&mut self, prefs: &mut Preferences) -> Theme {
        self.theme = self.theme.toggled();
        prefs.set(THEME_KEY, self.theme.as_str());
        self.theme
    }
}
