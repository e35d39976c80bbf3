//! Application model types: `App` and `Page`.

use crate::audio::{AudioPlayer, MediaElement};
use crate::blog::LanguageSelection;
use crate::content::{BlogPost, ContentStore, Language};
use crate::route::Route;
use crate::storage::Preferences;
use crate::theme::{Palette, Theme, ThemeToggle};

/// The player type the app drives; the element is chosen at startup.
pub type Player = AudioPlayer<Box<dyn MediaElement>>;

/// What is currently on screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    /// The post listing.
    Blog,
    /// A single post, by slug.
    Post(String),
    /// A post slug that does not exist.
    NotFound(String),
    Brief,
}

/// The main application model.
pub struct App {
    pub content: ContentStore,
    pub prefs: Preferences,
    pub theme: ThemeToggle,
    pub language: LanguageSelection,
    pub page: Page,
    /// Cursor in the post listing (newest first).
    pub selected_post: usize,
    /// Vertical scroll offset of the current page.
    pub scroll: u16,
    pub player: Option<Player>,
    pub header_text: String,
}

impl App {
    /// Create the model on the landing page. `explicit_lang` is a language
    /// requested on the command line or in the route.
    pub fn new(
        content: ContentStore,
        mut prefs: Preferences,
        theme: ThemeToggle,
        explicit_lang: Option<Language>,
    ) -> Self {
        let language = LanguageSelection::init(explicit_lang, &mut prefs);
        Self {
            content,
            prefs,
            theme,
            language,
            page: Page::Home,
            selected_post: 0,
            scroll: 0,
            player: None,
            header_text: String::new(),
        }
    }

    pub fn with_player(mut self, player: Player) -> Self {
        self.player = Some(player);
        self
    }

    pub fn with_header_text(mut self, text: impl Into<String>) -> Self {
        self.header_text = text.into();
        self
    }

    /// Show the page a route points at.
    pub fn navigate(&mut self, route: &Route) {
        self.scroll = 0;
        match route {
            Route::Home => self.page = Page::Home,
            Route::Brief => self.page = Page::Brief,
            Route::Blog { post, lang } => {
                if let Some(lang) = lang {
                    self.language.set(*lang, &mut self.prefs);
                }
                match post {
                    Some(slug) => self.open_post(slug),
                    None => self.page = Page::Blog,
                }
            }
        }
    }

    /// Open a post by slug; unknown slugs land on the not-found page.
    pub fn open_post(&mut self, slug: &str) {
        self.scroll = 0;
        if self.content.get_post(slug).is_none() {
            log::debug!("no post with slug `{slug}`");
            self.page = Page::NotFound(slug.to_string());
            return;
        }

        if let Some(pos) = self
            .content
            .list_summaries()
            .iter()
            .position(|s| s.slug == slug)
        {
            self.selected_post = pos;
        }
        self.page = Page::Post(slug.to_string());
    }

    /// Open the post under the listing cursor.
    pub fn open_selected(&mut self) {
        let slug = self
            .content
            .list_summaries()
            .get(self.selected_post)
            .map(|s| s.slug.to_string());
        if let Some(slug) = slug {
            self.open_post(&slug);
        }
    }

    /// Go one level up: post -> listing -> home.
    pub fn back(&mut self) {
        self.scroll = 0;
        self.page = match self.page {
            Page::Post(_) | Page::NotFound(_) => Page::Blog,
            Page::Blog | Page::Brief | Page::Home => Page::Home,
        };
    }

    pub fn select_next(&mut self) {
        let n = self.content.post_count();
        if n == 0 {
            return;
        }
        self.selected_post = (self.selected_post + 1) % n;
    }

    pub fn select_prev(&mut self) {
        let n = self.content.post_count();
        if n == 0 {
            return;
        }
        self.selected_post = (self.selected_post + n - 1) % n;
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme.toggle(&mut self.prefs)
    }

    pub fn toggle_language(&mut self) -> Language {
        self.language.toggle(&mut self.prefs)
    }

    pub fn lang(&self) -> Language {
        self.language.current()
    }

    pub fn palette(&self) -> Palette {
        self.theme.theme().palette()
    }

    /// The post on screen, if any.
    pub fn current_post(&self) -> Option<&BlogPost> {
        match &self.page {
            Page::Post(slug) => self.content.get_post(slug),
            _ => None,
        }
    }

    /// The route that reproduces the current page.
    pub fn current_route(&self) -> Route {
        match &self.page {
            Page::Home => Route::Home,
            Page::Brief => Route::Brief,
            Page::Blog => Route::Blog {
                post: None,
                lang: Some(self.lang()),
            },
            Page::Post(slug) | Page::NotFound(slug) => Route::Blog {
                post: Some(slug.clone()),
                lang: Some(self.lang()),
            },
        }
    }
}
