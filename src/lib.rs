// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. format::MarkerKind)
    clippy::module_name_repetitions
)]

//! # Markdraft
//!
//! A terminal markdown drafting surface.
//!
//! Markdraft edits raw markdown with a formatting toolbar:
//! - Bold, italic and strikethrough toggles on the selection
//! - Heading prefix and idempotent bullet lists
//! - A rendered, read-only preview mode
//!
//! ## Architecture
//!
//! The formatting engine is a set of pure functions over
//! (text, selection, marker). The terminal shell around it uses The Elm
//! Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`selection`]: Selection ranges and their validation
//! - [`format`]: The markdown formatting engine
//! - [`editor`]: Rope-backed text buffer with cursor and selection
//! - [`preview`]: Markdown rendering for preview mode
//! - [`app`]: Main application loop and state
//! - [`ui`]: Terminal UI components
//! - [`config`]: Flag-file defaults

pub mod app;
pub mod config;
pub mod editor;
pub mod format;
pub mod preview;
pub mod selection;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::format::{Formatter, MarkdownFormatter, Marker};
    pub use crate::selection::SelectionRange;
}
