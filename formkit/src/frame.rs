//! Rectangular base shared by all widgets: geometry, border, title,
//! background and focus.

use cellterm::text::print;
use cellterm::{Border, Color, Rect, Screen, Style, TextAlign};

use crate::theme::Theme;

/// The base every widget composes.
///
/// A frame draws its background (if set), border and title. Widgets draw
/// their content into [`Frame::inner_rect`] afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    rect: Rect,
    border: Border,
    border_color: Color,
    title: String,
    title_color: Color,
    title_align: TextAlign,
    /// `None` leaves whatever is already on screen.
    background: Option<Color>,
    focused: bool,
}

impl Frame {
    /// Create a frame with no border and a transparent background.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a frame colored from a theme.
    pub fn themed(theme: &Theme) -> Self {
        Self {
            border_color: theme.border,
            title_color: theme.title,
            background: theme.background,
            ..Self::default()
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn set_rect(&mut self, rect: Rect) -> &mut Self {
        self.rect = rect;
        self
    }

    pub fn border(&self) -> Border {
        self.border
    }

    pub fn has_border(&self) -> bool {
        self.border != Border::None
    }

    pub fn set_border(&mut self, border: Border) -> &mut Self {
        self.border = border;
        self
    }

    pub fn set_border_color(&mut self, color: Color) -> &mut Self {
        self.border_color = color;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = title.into();
        self
    }

    pub fn set_title_color(&mut self, color: Color) -> &mut Self {
        self.title_color = color;
        self
    }

    pub fn set_title_align(&mut self, align: TextAlign) -> &mut Self {
        self.title_align = align;
        self
    }

    pub fn background(&self) -> Option<Color> {
        self.background
    }

    pub fn set_background(&mut self, color: Color) -> &mut Self {
        self.background = Some(color);
        self
    }

    pub fn clear_background(&mut self) -> &mut Self {
        self.background = None;
        self
    }

    pub fn has_focus(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) -> &mut Self {
        self.focused = focused;
        self
    }

    /// The area left for content once the border ring is reserved.
    /// Collapses to zero width/height when the frame is too small.
    pub fn inner_rect(&self) -> Rect {
        if self.has_border() {
            self.rect.inset(1)
        } else {
            self.rect
        }
    }

    pub fn draw(&self, screen: &mut dyn Screen) {
        let rect = self.rect;
        if rect.is_empty() {
            return;
        }

        if let Some(bg) = self.background {
            let style = Style::new().background(bg);
            for y in rect.top()..rect.bottom() {
                for x in rect.left()..rect.right() {
                    screen.set_content(x, y, ' ', &[], style);
                }
            }
        }

        self.draw_border(screen);
    }

    fn draw_border(&self, screen: &mut dyn Screen) {
        let Some((tl, tr, bl, br, h, v)) = self.border.glyphs() else {
            return;
        };

        let rect = self.rect;
        if rect.width < 2 || rect.height < 2 {
            return;
        }

        let right = rect.right() - 1;
        let bottom = rect.bottom() - 1;

        let mut set = |x: u16, y: u16, ch: char| {
            // Preserve existing background
            let bg = screen
                .get_content(x, y)
                .map(|cell| cell.bg)
                .unwrap_or_default();
            let style = Style::new().foreground(self.border_color).background(bg);
            screen.set_content(x, y, ch, &[], style);
        };

        set(rect.x, rect.y, tl);
        set(right, rect.y, tr);
        set(rect.x, bottom, bl);
        set(right, bottom, br);

        for x in rect.x.saturating_add(1)..right {
            set(x, rect.y, h);
            set(x, bottom, h);
        }

        for y in rect.y.saturating_add(1)..bottom {
            set(rect.x, y, v);
            set(right, y, v);
        }

        if !self.title.is_empty() && rect.width > 2 {
            print(
                screen,
                &self.title,
                rect.x.saturating_add(1),
                rect.y,
                rect.width - 2,
                self.title_align,
                self.title_color,
            );
        }
    }
}
