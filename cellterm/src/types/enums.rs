#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Border {
    #[default]
    None,
    Single,
    Double,
    Rounded,
    Thick,
}

impl Border {
    /// Glyphs as (top-left, top-right, bottom-left, bottom-right, horizontal, vertical).
    pub const fn glyphs(self) -> Option<(char, char, char, char, char, char)> {
        match self {
            Border::None => None,
            Border::Single => Some(('┌', '┐', '└', '┘', '─', '│')),
            Border::Double => Some(('╔', '╗', '╚', '╝', '═', '║')),
            Border::Rounded => Some(('╭', '╮', '╰', '╯', '─', '│')),
            Border::Thick => Some(('┏', '┓', '┗', '┛', '━', '┃')),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub dim: bool,
    pub strikethrough: bool,
}

impl TextStyle {
    pub const fn new() -> Self {
        Self {
            bold: false,
            italic: false,
            underline: false,
            dim: false,
            strikethrough: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub const fn strikethrough(mut self) -> Self {
        self.strikethrough = true;
        self
    }
}
