//! Common imports for building forms.

pub use cellterm::{
    Border, Buffer, Color, Key, KeyEvent, Modifiers, Rect, Screen, Terminal, TextAlign,
};

pub use crate::form::FormItem;
pub use crate::frame::Frame;
pub use crate::primitive::{EventResult, Primitive};
pub use crate::theme::{Theme, ThemeError};
pub use crate::widgets::Checkbox;
