//! Form widgets.

pub mod checkbox;

pub use checkbox::Checkbox;
