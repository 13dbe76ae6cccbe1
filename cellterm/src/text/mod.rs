use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::screen::Screen;
use crate::types::{Color, Style, TextAlign};

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let current_width = display_width(s);
    if current_width <= max_width {
        return s.to_string();
    }

    if max_width == 0 {
        return String::new();
    }

    let ellipsis = "…";
    let ellipsis_width = 1;
    let target_width = max_width.saturating_sub(ellipsis_width);

    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = char_width(ch);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result.push_str(ellipsis);
    result
}

pub fn align_offset(text_width: usize, available_width: usize, align: TextAlign) -> usize {
    if text_width >= available_width {
        return 0;
    }

    match align {
        TextAlign::Left => 0,
        TextAlign::Center => (available_width - text_width) / 2,
        TextAlign::Right => available_width - text_width,
    }
}

/// Print the first line of `text` at `(x, y)` within `max_width` columns.
///
/// Text wider than `max_width` is truncated with an ellipsis. Existing cell
/// backgrounds are kept; only the foreground is set to `color`. Returns the
/// number of columns from `x` to the end of the printed text, alignment
/// offset included, so callers can continue drawing right after it.
pub fn print(
    screen: &mut dyn Screen,
    text: &str,
    x: u16,
    y: u16,
    max_width: u16,
    align: TextAlign,
    color: Color,
) -> u16 {
    if max_width == 0 {
        return 0;
    }

    let first_line = text.lines().next().unwrap_or("");
    let line = truncate_to_width(first_line, max_width as usize);
    let offset = align_offset(display_width(&line), max_width as usize, align) as u16;

    let right = x.saturating_add(max_width);
    let mut cx = x.saturating_add(offset);
    let mut previous: Option<u16> = None;

    for ch in line.chars() {
        let ch_w = char_width(ch) as u16;

        if ch_w == 0 {
            // Combining mark, layer it on the previous cell
            if let Some(px) = previous {
                attach_combining(screen, px, y, ch);
            }
            continue;
        }

        let next = match cx.checked_add(ch_w) {
            Some(next) if next <= right => next,
            _ => break,
        };

        let bg = screen
            .get_content(cx, y)
            .map(|cell| cell.bg)
            .unwrap_or_default();
        screen.set_content(cx, y, ch, &[], Style::new().foreground(color).background(bg));

        previous = Some(cx);
        cx = next;
    }

    cx - x
}

fn attach_combining(screen: &mut dyn Screen, x: u16, y: u16, mark: char) {
    let Some(cell) = screen.get_content(x, y) else {
        return;
    };
    let base = cell.char;
    let style = cell.cell_style();
    let mut combining = cell.combining.clone();
    combining.push(mark);
    screen.set_content(x, y, base, &combining, style);
}
