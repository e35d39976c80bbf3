//! Addressable page state.
//!
//! A route is written like a URL path with an optional query string, e.g.
//! `/blog?post=bilingual-content-without-tears&lang=es`.

use std::fmt;

use crate::content::Language;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    /// The post listing, or a single post when `post` is set.
    Blog {
        post: Option<String>,
        lang: Option<Language>,
    },
    Brief,
}

impl Route {
    /// Parse a route string. Unknown paths fall back to the landing page;
    /// unknown query keys and unsupported languages are ignored.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let (path, query) = input.split_once('?').unwrap_or((input, ""));
        let path = path.trim_matches('/');

        let mut post = None;
        let mut lang = None;
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "post" if !value.is_empty() => post = Some(value.to_string()),
                "lang" => lang = Language::from_code(value),
                _ => {}
            }
        }

        match path {
            "" => Route::Home,
            "blog" => Route::Blog { post, lang },
            "brief" => Route::Brief,
            other => {
                log::debug!("unknown route path `{other}`, showing home");
                Route::Home
            }
        }
    }

    /// Canonical string form of this route.
    pub fn to_path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Brief => "/brief".to_string(),
            Route::Blog { post, lang } => {
                let mut params = Vec::new();
                if let Some(slug) = post {
                    params.push(format!("post={slug}"));
                }
                if let Some(lang) = lang {
                    params.push(format!("lang={}", lang.code()));
                }
                if params.is_empty() {
                    "/blog".to_string()
                } else {
                    format!("/blog?{}", params.join("&"))
                }
            }
        }
    }

    /// The language requested by this route, if any.
    pub fn lang(&self) -> Option<Language> {
        match self {
            Route::Blog { lang, .. } => *lang,
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

#[cfg(test)]
mod tests;
