//! The client project brief.
//!
//! A single static proposal document, shown as a page in the TUI and
//! exportable as Markdown. Amounts are display-only.

mod markdown;
mod model;

pub use markdown::{export, to_markdown};
pub use model::*;
