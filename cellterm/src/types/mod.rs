mod color;
mod enums;
mod style;

pub use color::{Color, ParseColorError, Rgb};
pub use enums::{Border, TextAlign, TextStyle};
pub use style::Style;
