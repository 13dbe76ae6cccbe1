use crate::types::{Color, Style, TextStyle};

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub char: char,
    /// Zero-width characters drawn on top of `char`.
    pub combining: Vec<char>,
    pub fg: Color,
    pub bg: Color,
    pub style: TextStyle,
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: ' ',
            combining: Vec::new(),
            fg: Color::Reset,
            bg: Color::Reset,
            style: TextStyle::new(),
            wide_continuation: false,
        }
    }
}

impl Cell {
    pub fn new(char: char) -> Self {
        Self {
            char,
            ..Default::default()
        }
    }

    pub fn with_fg(mut self, fg: Color) -> Self {
        self.fg = fg;
        self
    }

    pub fn with_bg(mut self, bg: Color) -> Self {
        self.bg = bg;
        self
    }

    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_combining(mut self, combining: &[char]) -> Self {
        self.combining = combining.to_vec();
        self
    }

    /// The full style this cell was written with.
    pub fn cell_style(&self) -> Style {
        Style::new()
            .foreground(self.fg)
            .background(self.bg)
            .text_style(self.style)
    }
}
