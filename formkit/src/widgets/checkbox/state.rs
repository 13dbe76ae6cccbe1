//! Checkbox widget state.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use cellterm::{Border, Color, Key, Rect};

use crate::form::FinishedFn;
use crate::frame::Frame;
use crate::theme::Theme;

/// Handler called with the new state after the user toggles the checkbox.
pub type ChangedFn = Box<dyn FnMut(bool)>;

/// Internal state for a Checkbox widget
pub(super) struct CheckboxInner {
    pub(super) frame: Frame,
    /// Whether the checkbox is checked
    pub(super) checked: bool,
    /// Text drawn in front of the toggle
    pub(super) label: String,
    pub(super) label_color: Color,
    pub(super) field_background_color: Color,
    pub(super) field_text_color: Color,
    changed: Option<ChangedFn>,
    done: Option<FinishedFn>,
}

impl CheckboxInner {
    fn themed(theme: &Theme) -> Self {
        Self {
            frame: Frame::themed(theme),
            checked: false,
            label: String::new(),
            label_color: theme.label,
            field_background_color: theme.field_background,
            field_text_color: theme.field_text,
            changed: None,
            done: None,
        }
    }
}

/// A one-line checkbox: a label followed by a single toggle cell.
///
/// `Checkbox` is a cheap handle; clones share the same state. That lets a
/// changed or done handler hold its own clone and reconfigure the checkbox
/// while it is being dispatched to.
///
/// Space and Enter toggle the state and call the changed handler. Tab,
/// BackTab and Escape call the done handler so a form can move focus.
///
/// # Example
///
/// ```
/// use formkit::Checkbox;
///
/// let accept = Checkbox::new();
/// accept
///     .set_label("Accept")
///     .set_checked(true)
///     .set_changed_func(|checked| println!("accept = {checked}"));
/// assert!(accept.is_checked());
/// ```
#[derive(Clone)]
pub struct Checkbox {
    inner: Rc<RefCell<CheckboxInner>>,
}

impl Default for Checkbox {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Checkbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Checkbox")
            .field("label", &inner.label)
            .field("checked", &inner.checked)
            .field("frame", &inner.frame)
            .finish_non_exhaustive()
    }
}

impl Checkbox {
    /// Create an unchecked checkbox with the default theme.
    pub fn new() -> Self {
        Self::themed(&Theme::default())
    }

    /// Create an unchecked checkbox colored from `theme`.
    pub fn themed(theme: &Theme) -> Self {
        Self {
            inner: Rc::new(RefCell::new(CheckboxInner::themed(theme))),
        }
    }

    pub(super) fn inner(&self) -> std::cell::Ref<'_, CheckboxInner> {
        self.inner.borrow()
    }

    fn update(&self, f: impl FnOnce(&mut CheckboxInner)) -> &Self {
        f(&mut self.inner.borrow_mut());
        self
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Check if the checkbox is checked
    pub fn is_checked(&self) -> bool {
        self.inner.borrow().checked
    }

    /// Get the label text
    pub fn label(&self) -> String {
        self.inner.borrow().label.clone()
    }

    pub fn label_color(&self) -> Color {
        self.inner.borrow().label_color
    }

    pub fn field_background_color(&self) -> Color {
        self.inner.borrow().field_background_color
    }

    pub fn field_text_color(&self) -> Color {
        self.inner.borrow().field_text_color
    }

    /// Background of the composed frame, if one is set.
    pub fn background_color(&self) -> Option<Color> {
        self.inner.borrow().frame.background()
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Set the checked state. Does not call the changed handler.
    pub fn set_checked(&self, checked: bool) -> &Self {
        self.update(|inner| inner.checked = checked)
    }

    /// Set the text displayed in front of the toggle.
    pub fn set_label(&self, label: impl Into<String>) -> &Self {
        let label = label.into();
        self.update(|inner| inner.label = label)
    }

    pub fn set_label_color(&self, color: Color) -> &Self {
        self.update(|inner| inner.label_color = color)
    }

    /// Background of the toggle cell while unfocused.
    pub fn set_field_background_color(&self, color: Color) -> &Self {
        self.update(|inner| inner.field_background_color = color)
    }

    /// Glyph color of the toggle cell while unfocused.
    pub fn set_field_text_color(&self, color: Color) -> &Self {
        self.update(|inner| inner.field_text_color = color)
    }

    /// Re-color from a theme. Label, state and handlers are kept.
    pub fn set_theme(&self, theme: &Theme) -> &Self {
        self.update(|inner| {
            inner.label_color = theme.label;
            inner.field_background_color = theme.field_background;
            inner.field_text_color = theme.field_text;
            inner.frame.set_border_color(theme.border);
            inner.frame.set_title_color(theme.title);
            match theme.background {
                Some(bg) => inner.frame.set_background(bg),
                None => inner.frame.clear_background(),
            };
        })
    }

    /// Set label, label color, frame background, field text color and field
    /// background in one call.
    pub fn set_form_attributes(
        &self,
        label: &str,
        label_color: Color,
        background: Color,
        field_text_color: Color,
        field_background_color: Color,
    ) -> &Self {
        self.update(|inner| {
            inner.label = label.to_string();
            inner.label_color = label_color;
            inner.frame.set_background(background);
            inner.field_text_color = field_text_color;
            inner.field_background_color = field_background_color;
        })
    }

    /// Set the handler called after the user toggled the checkbox. It
    /// receives the new state. Replaces any previous handler.
    pub fn set_changed_func(&self, handler: impl FnMut(bool) + 'static) -> &Self {
        let handler: ChangedFn = Box::new(handler);
        self.update(|inner| inner.changed = Some(handler))
    }

    /// Set the handler called when the user is done with the checkbox. It
    /// receives the key that was pressed:
    ///
    /// - `Key::Escape`: leave the form.
    /// - `Key::Tab`: move to the next field.
    /// - `Key::BackTab`: move to the previous field.
    pub fn set_done_func(&self, handler: impl FnMut(Key) + 'static) -> &Self {
        let handler: FinishedFn = Box::new(handler);
        self.update(|inner| inner.done = Some(handler))
    }

    /// Same as [`Checkbox::set_done_func`].
    pub fn set_finished_func(&self, handler: impl FnMut(Key) + 'static) -> &Self {
        self.set_done_func(handler)
    }

    // -------------------------------------------------------------------------
    // Frame
    // -------------------------------------------------------------------------

    pub fn set_rect(&self, rect: Rect) -> &Self {
        self.update(|inner| {
            inner.frame.set_rect(rect);
        })
    }

    pub fn set_border(&self, border: Border) -> &Self {
        self.update(|inner| {
            inner.frame.set_border(border);
        })
    }

    pub fn set_border_color(&self, color: Color) -> &Self {
        self.update(|inner| {
            inner.frame.set_border_color(color);
        })
    }

    pub fn set_title(&self, title: impl Into<String>) -> &Self {
        let title = title.into();
        self.update(|inner| {
            inner.frame.set_title(title);
        })
    }

    pub fn set_background_color(&self, color: Color) -> &Self {
        self.update(|inner| {
            inner.frame.set_background(color);
        })
    }

    pub(super) fn set_focused(&self, focused: bool) {
        self.update(|inner| {
            inner.frame.set_focused(focused);
        });
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Flip the state, then call the changed handler with the new value.
    ///
    /// The handler is taken out of its slot while it runs so it may call
    /// back into this checkbox. If it installed a replacement, the
    /// replacement wins.
    pub(super) fn toggle(&self) -> bool {
        let (checked, handler) = {
            let mut inner = self.inner.borrow_mut();
            inner.checked = !inner.checked;
            (inner.checked, inner.changed.take())
        };
        log::debug!("[checkbox] '{}' toggled to {}", self.label(), checked);

        if let Some(mut handler) = handler {
            handler(checked);
            let mut inner = self.inner.borrow_mut();
            if inner.changed.is_none() {
                inner.changed = Some(handler);
            }
        }
        checked
    }

    /// Call the done handler with `key`. Returns false if none is installed.
    pub(super) fn finish(&self, key: Key) -> bool {
        let Some(mut handler) = self.inner.borrow_mut().done.take() else {
            return false;
        };
        log::debug!("[checkbox] '{}' done with {:?}", self.label(), key);

        handler(key);
        let mut inner = self.inner.borrow_mut();
        if inner.done.is_none() {
            inner.done = Some(handler);
        }
        true
    }
}
