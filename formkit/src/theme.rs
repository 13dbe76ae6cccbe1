//! Color configuration for form widgets.

use std::str::FromStr;

use cellterm::{Color, ParseColorError};
use thiserror::Error;

/// Errors from string-keyed theme overrides.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// The key does not name a theme slot.
    #[error("unknown theme key '{0}'")]
    UnknownKey(String),

    /// The value could not be parsed as a color.
    #[error("invalid color for '{key}': {source}")]
    InvalidColor {
        /// The theme key being set.
        key: String,
        /// Why parsing failed.
        #[source]
        source: ParseColorError,
    },
}

/// Colors applied to widgets when they are created.
///
/// The default labels in yellow and draws fields as white on blue, with no
/// frame background.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Label text in front of a field.
    pub label: Color,
    /// Background of the input area.
    pub field_background: Color,
    /// Text of the input area.
    pub field_text: Color,
    /// Frame background. `None` keeps whatever is behind the widget.
    pub background: Option<Color>,
    /// Border lines.
    pub border: Color,
    /// Title drawn in the top border.
    pub title: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            label: Color::YELLOW,
            field_background: Color::BLUE,
            field_text: Color::WHITE,
            background: None,
            border: Color::WHITE,
            title: Color::WHITE,
        }
    }
}

impl Theme {
    /// Keys accepted by [`Theme::set`].
    pub const KEYS: &'static [&'static str] = &[
        "label",
        "field_background",
        "field_text",
        "background",
        "border",
        "title",
    ];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, color: Color) -> Self {
        self.label = color;
        self
    }

    pub fn field_background(mut self, color: Color) -> Self {
        self.field_background = color;
        self
    }

    pub fn field_text(mut self, color: Color) -> Self {
        self.field_text = color;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn border(mut self, color: Color) -> Self {
        self.border = color;
        self
    }

    pub fn title(mut self, color: Color) -> Self {
        self.title = color;
        self
    }

    /// Override one slot from strings, e.g. `set("label", "#ff8800")`.
    ///
    /// `background` also accepts `none` to make the frame transparent.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        if !Self::KEYS.contains(&key) {
            return Err(ThemeError::UnknownKey(key.to_string()));
        }

        if key == "background" && value.trim().eq_ignore_ascii_case("none") {
            self.background = None;
            return Ok(());
        }

        let color = Color::from_str(value).map_err(|source| ThemeError::InvalidColor {
            key: key.to_string(),
            source,
        })?;

        match key {
            "label" => self.label = color,
            "field_background" => self.field_background = color,
            "field_text" => self.field_text = color,
            "background" => self.background = Some(color),
            "border" => self.border = color,
            _ => self.title = color,
        }

        log::debug!("[theme] {} = {}", key, color);
        Ok(())
    }
}
