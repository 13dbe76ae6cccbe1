use crate::buffer::Cell;
use crate::types::Style;

/// A grid of styled character cells that widgets draw into.
///
/// Writes outside of `size()` are silently dropped.
pub trait Screen {
    fn size(&self) -> (u16, u16);

    /// Write one cell. `combining` holds zero-width characters layered on `ch`.
    fn set_content(&mut self, x: u16, y: u16, ch: char, combining: &[char], style: Style);

    fn get_content(&self, x: u16, y: u16) -> Option<&Cell>;

    fn show_cursor(&mut self, x: u16, y: u16);

    fn hide_cursor(&mut self);
}
