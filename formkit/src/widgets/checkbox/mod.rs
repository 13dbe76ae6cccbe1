//! Checkbox widget - a labeled boolean toggle.

mod events;
mod render;
mod state;

pub use render::{CHECKED_GLYPH, UNCHECKED_GLYPH};
pub use state::{ChangedFn, Checkbox};
