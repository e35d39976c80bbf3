//! Bilingual blog: language selection and content-block rendering.

mod language;
mod render;

pub use language::{LanguageSelection, resolve_language};
pub use render::{render_block, render_blocks};

#[cfg(test)]
mod tests;
