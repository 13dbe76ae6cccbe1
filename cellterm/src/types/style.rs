use super::{Color, TextStyle};

/// Foreground, background and attributes of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Style {
    pub foreground: Color,
    pub background: Color,
    pub text_style: TextStyle,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = color;
        self
    }

    pub fn text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = text_style;
        self
    }

    pub fn bold(mut self) -> Self {
        self.text_style.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.text_style.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.text_style.underline = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.text_style.dim = true;
        self
    }

    /// Swap foreground and background.
    pub fn reversed(self) -> Self {
        Self {
            foreground: self.background,
            background: self.foreground,
            text_style: self.text_style,
        }
    }
}
