use super::Cell;
use crate::screen::Screen;
use crate::text::char_width;
use crate::types::Style;

/// An in-memory grid of cells plus the cursor position requested by the
/// last draw. `None` means the cursor is hidden.
#[derive(Debug, Clone, PartialEq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    cursor: Option<(u16, u16)>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
            cursor: None,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cursor(&self) -> Option<(u16, u16)> {
        self.cursor
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    /// Reset every cell and hide the cursor.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
        self.cursor = None;
    }
}

impl Screen for Buffer {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn set_content(&mut self, x: u16, y: u16, ch: char, combining: &[char], style: Style) {
        if x >= self.width || y >= self.height {
            return;
        }

        let cell = Cell::new(ch)
            .with_fg(style.foreground)
            .with_bg(style.background)
            .with_style(style.text_style)
            .with_combining(combining);
        self.set(x, y, cell);

        // Wide chars (CJK) own the cell to their right
        if char_width(ch) == 2 && x + 1 < self.width {
            let mut continuation = Cell::new(' ')
                .with_fg(style.foreground)
                .with_bg(style.background)
                .with_style(style.text_style);
            continuation.wide_continuation = true;
            self.set(x + 1, y, continuation);
        }
    }

    fn get_content(&self, x: u16, y: u16) -> Option<&Cell> {
        self.get(x, y)
    }

    fn show_cursor(&mut self, x: u16, y: u16) {
        self.cursor = Some((x, y));
    }

    fn hide_cursor(&mut self) {
        self.cursor = None;
    }
}
