//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the content, the current
//! page, the user's preferences and the background player.

mod model;

pub use model::*;
