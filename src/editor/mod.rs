//! Editable document text.
//!
//! Provides a rope-backed text buffer with cursor and selection
//! management, exposed to the shell through the [`TextSurface`] trait.

mod buffer;
mod surface;

pub use buffer::{Cursor, Direction, EditorBuffer};
pub use surface::TextSurface;
