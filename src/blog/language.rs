use crate::content::Language;
use crate::storage::{LANGUAGE_KEY, Preferences};

/// Pick the blog language: an explicit choice (route or CLI) wins, then the
/// stored preference, then English. Stored values outside the supported
/// set are ignored.
pub fn resolve_language(explicit: Option<Language>, prefs: &Preferences) -> Language {
    explicit
        .or_else(|| {
            prefs
                .get(LANGUAGE_KEY)
                .and_then(|v| Language::from_code(&v))
        })
        .unwrap_or_default()
}

/// The current blog language, persisted on every change.
#[derive(Debug, Clone, Copy)]
pub struct LanguageSelection {
    current: Language,
}

impl LanguageSelection {
    /// Resolve the initial language and persist it for future visits.
    pub fn init(explicit: Option<Language>, prefs: &mut Preferences) -> Self {
        let current = resolve_language(explicit, prefs);
        prefs.set(LANGUAGE_KEY, current.code());
        Self { current }
    }

    pub fn current(&self) -> Language {
        self.current
    }

    pub fn set(&mut self, lang: Language, prefs: &mut Preferences) {
        self.current = lang;
        prefs.set(LANGUAGE_KEY, lang.code());
    }

    pub fn toggle(&mut self, prefs: &mut Preferences) -> Language {
        self.set(self.current.toggled(), prefs);
        self.current
    }
}
