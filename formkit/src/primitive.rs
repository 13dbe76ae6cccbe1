//! The drawable, focusable unit every widget implements.

use cellterm::{KeyEvent, Rect, Screen};

/// Result of handling a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// A widget that can be drawn, focused and fed key events.
///
/// Methods take `&self`; widgets are shared handles with interior state so
/// their own handlers can call back into them while an event is dispatched.
pub trait Primitive {
    /// Draw onto the screen. Must not change widget state.
    fn draw(&self, screen: &mut dyn Screen);

    /// Handle a key press. Only called while the widget has focus.
    fn handle_key(&self, event: &KeyEvent) -> EventResult;

    /// The widget's outer rectangle, border included.
    fn rect(&self) -> Rect;

    /// Move or resize the widget.
    fn set_rect(&self, rect: Rect);

    /// Called when the widget receives focus.
    fn focus(&self);

    /// Called when the widget loses focus.
    fn blur(&self);

    /// Whether the widget currently has focus.
    fn has_focus(&self) -> bool;
}
