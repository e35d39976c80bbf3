use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Languages content is written in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Es];

    /// Two-letter code used in routes and the preference store.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }

    /// Parse a language code; anything outside the closed set is `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "es" => Some(Language::Es),
            _ => None,
        }
    }

    /// Native name, shown in the language switcher.
    pub fn label(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Es,
            Language::Es => Language::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The same text in every supported language.
///
/// Written in TOML as `{ en = "...", es = "..." }`. Completeness is checked
/// when the content store is built, so `get` only falls back to an empty
/// string for values constructed outside the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Localized(BTreeMap<Language, String>);

impl Localized {
    pub fn new(en: impl Into<String>, es: impl Into<String>) -> Self {
        Self(BTreeMap::from([
            (Language::En, en.into()),
            (Language::Es, es.into()),
        ]))
    }

    pub fn get(&self, lang: Language) -> &str {
        self.0.get(&lang).map(String::as_str).unwrap_or("")
    }

    /// Languages with no text, or only whitespace.
    pub fn missing(&self) -> impl Iterator<Item = Language> + '_ {
        Language::ALL
            .into_iter()
            .filter(|lang| self.0.get(lang).is_none_or(|s| s.trim().is_empty()))
    }
}

/// One unit of rendered content inside a post.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ContentBlock {
    Heading {
        level: u8,
        text: Localized,
    },
    Paragraph {
        text: Localized,
    },
    List {
        #[serde(default)]
        ordered: bool,
        items: Vec<Localized>,
    },
    Quote {
        text: Localized,
        #[serde(default)]
        attribution: Option<String>,
    },
    Code {
        code: String,
        #[serde(default)]
        language: Option<String>,
    },
    Image {
        src: String,
        alt: Localized,
        #[serde(default)]
        caption: Option<Localized>,
    },
    /// A block type this build does not know how to render.
    #[serde(other)]
    Unknown,
}

impl ContentBlock {
    /// Short name used in validation messages.
    pub fn kind(&self) -> &'static str {
        match self {
            ContentBlock::Heading { .. } => "heading",
            ContentBlock::Paragraph { .. } => "paragraph",
            ContentBlock::List { .. } => "list",
            ContentBlock::Quote { .. } => "quote",
            ContentBlock::Code { .. } => "code",
            ContentBlock::Image { .. } => "image",
            ContentBlock::Unknown => "unknown",
        }
    }

    /// Every language-keyed field carried by this block.
    pub fn localized_fields(&self) -> Vec<&Localized> {
        match self {
            ContentBlock::Heading { text, .. }
            | ContentBlock::Paragraph { text }
            | ContentBlock::Quote { text, .. } => vec![text],
            ContentBlock::List { items, .. } => items.iter().collect(),
            ContentBlock::Image { alt, caption, .. } => {
                let mut fields = vec![alt];
                fields.extend(caption.as_ref());
                fields
            }
            ContentBlock::Code { .. } | ContentBlock::Unknown => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BlogPost {
    /// Unique, stable identifier used in routes.
    pub slug: String,
    pub title: Localized,
    pub description: Localized,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub blocks: Vec<ContentBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

/// A project card on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectMeta {
    pub title: String,
    pub description: Localized,
    #[serde(default)]
    pub stack: Vec<String>,
    #[serde(default)]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorkflowStep {
    pub title: Localized,
    pub detail: Localized,
}

/// Landing page sections other than the project list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: Localized,
    pub tagline: Localized,
    #[serde(default)]
    pub about: Vec<Localized>,
    #[serde(default)]
    pub workflow: Vec<WorkflowStep>,
    #[serde(default)]
    pub contact: Vec<Link>,
}
