//! Static site content: blog posts, projects, profile sections and the
//! client proposal.
//!
//! Content is embedded into the binary from the TOML files under `content/`
//! and validated once when the [`ContentStore`] is built. After that it is
//! read-only.

mod load;
mod model;
mod store;
mod validate;

pub use model::*;
pub use store::{ContentStore, PostSummary};

/// Errors raised while loading or validating content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to parse {name}: {source}")]
    Parse {
        name: &'static str,
        #[source]
        source: toml::de::Error,
    },
    #[error("{context} is missing its `{language}` translation")]
    MissingTranslation { context: String, language: Language },
    #[error("duplicate post slug `{0}`")]
    DuplicateSlug(String),
    #[error("post slug `{0}` must be non-empty and URL-safe")]
    InvalidSlug(String),
    #[error("{context} has heading level {level}, expected 1 to 6")]
    InvalidHeadingLevel { context: String, level: u8 },
}

#[cfg(test)]
mod tests;
