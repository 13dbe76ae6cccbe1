//! Checkbox rendering.

use cellterm::text::print;
use cellterm::{Color, Rect, Screen, Style, TextAlign};

/// Toggle glyph when checked.
pub const CHECKED_GLYPH: char = 'X';
/// Toggle glyph when unchecked.
pub const UNCHECKED_GLYPH: char = ' ';

pub(super) struct CheckboxView<'a> {
    pub label: &'a str,
    pub checked: bool,
    pub label_color: Color,
    pub field_background: Color,
    pub field_text: Color,
    pub focused: bool,
}

/// Draw the label and toggle cell into `area`, the frame's inner rect.
///
/// The label gets at most `area.width - 1` columns so the toggle cell always
/// lands inside `area`. Nothing is written if `area` is empty.
pub(super) fn render_checkbox(screen: &mut dyn Screen, area: Rect, view: &CheckboxView<'_>) {
    if area.height < 1 || area.width < 1 {
        log::trace!("[checkbox] skipping draw, no room in {:?}", area);
        return;
    }

    let label_width = print(
        screen,
        view.label,
        area.x,
        area.y,
        area.width - 1,
        TextAlign::Left,
        view.label_color,
    );

    let mut field_style = Style::new()
        .background(view.field_background)
        .foreground(view.field_text);
    if view.focused {
        field_style = field_style.reversed();
    }

    let glyph = if view.checked {
        CHECKED_GLYPH
    } else {
        UNCHECKED_GLYPH
    };
    screen.set_content(area.x.saturating_add(label_width), area.y, glyph, &[], field_style);

    // No caret to show on a checkbox
    if view.focused {
        screen.hide_cursor();
    }
}
