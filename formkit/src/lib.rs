//! Form widgets drawn onto a `cellterm` screen.
//!
//! Every widget composes a [`Frame`] for its geometry, border and
//! background, implements [`Primitive`] for drawing and key handling, and
//! implements [`FormItem`] so a form container can style and chain it
//! alongside its siblings.

pub mod form;
pub mod frame;
pub mod prelude;
pub mod primitive;
pub mod theme;
pub mod widgets;

pub use form::FormItem;
pub use frame::Frame;
pub use primitive::{EventResult, Primitive};
pub use theme::{Theme, ThemeError};
pub use widgets::Checkbox;
