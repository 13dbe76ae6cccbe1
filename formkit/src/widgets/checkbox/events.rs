//! Event handling for the Checkbox widget.

use cellterm::{Color, Key, KeyEvent, Rect, Screen};

use super::render::{render_checkbox, CheckboxView};
use super::Checkbox;
use crate::form::{FinishedFn, FormItem};
use crate::primitive::{EventResult, Primitive};

impl Primitive for Checkbox {
    fn draw(&self, screen: &mut dyn Screen) {
        let inner = self.inner();
        inner.frame.draw(screen);

        let view = CheckboxView {
            label: &inner.label,
            checked: inner.checked,
            label_color: inner.label_color,
            field_background: inner.field_background_color,
            field_text: inner.field_text_color,
            focused: inner.frame.has_focus(),
        };
        render_checkbox(screen, inner.frame.inner_rect(), &view);
    }

    fn handle_key(&self, event: &KeyEvent) -> EventResult {
        match event.key {
            Key::Char(' ') | Key::Enter => {
                self.toggle();
                EventResult::Consumed
            }
            Key::Tab | Key::BackTab | Key::Escape => {
                if self.finish(event.key) {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            _ => {
                log::trace!("[checkbox] ignoring {:?}", event.key);
                EventResult::Ignored
            }
        }
    }

    fn rect(&self) -> Rect {
        self.inner().frame.rect()
    }

    fn set_rect(&self, rect: Rect) {
        Checkbox::set_rect(self, rect);
    }

    fn focus(&self) {
        self.set_focused(true);
    }

    fn blur(&self) {
        self.set_focused(false);
    }

    fn has_focus(&self) -> bool {
        self.inner().frame.has_focus()
    }
}

impl FormItem for Checkbox {
    fn label(&self) -> String {
        Checkbox::label(self)
    }

    fn set_form_attributes(
        &self,
        label: &str,
        label_color: Color,
        background: Color,
        field_text_color: Color,
        field_background_color: Color,
    ) -> &dyn FormItem {
        Checkbox::set_form_attributes(
            self,
            label,
            label_color,
            background,
            field_text_color,
            field_background_color,
        );
        self
    }

    fn set_finished_func(&self, handler: FinishedFn) -> &dyn FormItem {
        self.set_done_func(handler);
        self
    }
}
