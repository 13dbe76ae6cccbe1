use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent, KeyEventKind},
    execute,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::buffer::Buffer;
use crate::event::KeyEvent;
use crate::text::char_width;
use crate::types::{Color, TextStyle};

/// Raw-mode alternate-screen terminal with double-buffered diff output.
pub struct Terminal {
    stdout: io::Stdout,
    current_buffer: Buffer,
    previous_buffer: Buffer,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

        let (width, height) = terminal::size()?;
        let current_buffer = Buffer::new(width, height);
        let previous_buffer = Buffer::new(width, height);

        Ok(Self {
            stdout,
            current_buffer,
            previous_buffer,
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current_buffer.width(), self.current_buffer.height())
    }

    /// Wait for key presses. `None` blocks until one arrives.
    ///
    /// Non-key events are dropped; the next `draw` picks up size changes.
    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<KeyEvent>> {
        let mut events = Vec::new();

        let has_event = match timeout {
            Some(dur) => event::poll(dur)?,
            None => true,
        };

        if has_event {
            push_key(&mut events, event::read()?);
            // Drain any additional pending events
            while event::poll(Duration::ZERO)? {
                push_key(&mut events, event::read()?);
            }
        }

        Ok(events)
    }

    /// Clear the back buffer, let `f` draw into it, then flush the changes.
    pub fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut Buffer),
    {
        // Check if terminal size changed
        let (width, height) = terminal::size()?;
        if width != self.current_buffer.width() || height != self.current_buffer.height() {
            log::debug!("[terminal] resized to {}x{}", width, height);
            self.current_buffer = Buffer::new(width, height);
            self.previous_buffer = Buffer::new(width, height);
            execute!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }

        self.current_buffer.clear();
        f(&mut self.current_buffer);

        self.flush_diff()?;
        self.flush_cursor()?;

        std::mem::swap(&mut self.current_buffer, &mut self.previous_buffer);

        Ok(())
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last_x = u16::MAX;
        let mut last_y = u16::MAX;
        let mut last_char_width: u16 = 1;
        let mut last_fg = Color::Reset;
        let mut last_bg = Color::Reset;
        let mut last_style = TextStyle::new();

        // Reset to known state at start
        execute!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in self.current_buffer.diff(&self.previous_buffer) {
            // The wide char already occupies this space
            if cell.wide_continuation {
                continue;
            }

            if y != last_y || x != last_x.wrapping_add(last_char_width) {
                execute!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if cell.fg != last_fg {
                execute!(self.stdout, SetForegroundColor(to_crossterm(cell.fg)))?;
                last_fg = cell.fg;
            }

            if cell.bg != last_bg {
                execute!(self.stdout, SetBackgroundColor(to_crossterm(cell.bg)))?;
                last_bg = cell.bg;
            }

            if cell.style != last_style {
                apply_text_style(&mut self.stdout, cell.style)?;
                // Attribute reset also resets colors
                execute!(
                    self.stdout,
                    SetForegroundColor(to_crossterm(cell.fg)),
                    SetBackgroundColor(to_crossterm(cell.bg))
                )?;
                last_style = cell.style;
            }

            write!(self.stdout, "{}", cell.char)?;
            for mark in &cell.combining {
                write!(self.stdout, "{}", mark)?;
            }

            last_x = x;
            last_y = y;
            last_char_width = char_width(cell.char).max(1) as u16;
        }

        execute!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()
    }

    fn flush_cursor(&mut self) -> io::Result<()> {
        match self.current_buffer.cursor() {
            Some((x, y)) => execute!(self.stdout, cursor::MoveTo(x, y), cursor::Show),
            None => execute!(self.stdout, cursor::Hide),
        }
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn push_key(events: &mut Vec<KeyEvent>, event: CrosstermEvent) {
    match event {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => events.push(key.into()),
        _ => {}
    }
}

fn to_crossterm(color: Color) -> CtColor {
    match color.to_rgb() {
        Some(rgb) => CtColor::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        },
        None => CtColor::Reset,
    }
}

fn apply_text_style(stdout: &mut io::Stdout, style: TextStyle) -> io::Result<()> {
    execute!(stdout, SetAttribute(Attribute::Reset))?;
    if style.bold {
        execute!(stdout, SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        execute!(stdout, SetAttribute(Attribute::Dim))?;
    }
    if style.italic {
        execute!(stdout, SetAttribute(Attribute::Italic))?;
    }
    if style.underline {
        execute!(stdout, SetAttribute(Attribute::Underlined))?;
    }
    if style.strikethrough {
        execute!(stdout, SetAttribute(Attribute::CrossedOut))?;
    }
    Ok(())
}
