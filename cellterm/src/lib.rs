pub mod buffer;
pub mod event;
pub mod layout;
pub mod screen;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use event::{Key, KeyEvent, Modifiers};
pub use layout::Rect;
pub use screen::Screen;
pub use terminal::Terminal;
pub use types::*;
