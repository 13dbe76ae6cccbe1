use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A cell color. `Reset` leaves the terminal's own default in place.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Color {
    #[default]
    Reset,
    Rgb { r: u8, g: u8, b: u8 },
    Oklch { l: f32, c: f32, h: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

const NAMED: &[(&str, Color)] = &[
    ("black", Color::BLACK),
    ("red", Color::RED),
    ("green", Color::GREEN),
    ("yellow", Color::YELLOW),
    ("blue", Color::BLUE),
    ("magenta", Color::MAGENTA),
    ("cyan", Color::CYAN),
    ("white", Color::WHITE),
    ("gray", Color::GRAY),
    ("grey", Color::GRAY),
];

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(128, 128, 128);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub const fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    /// Resolve to concrete RGB. `None` for `Reset`.
    pub fn to_rgb(&self) -> Option<Rgb> {
        match self {
            Self::Reset => None,
            Self::Rgb { r, g, b } => Some(Rgb::new(*r, *g, *b)),
            Self::Oklch { l, c, h } => Some(oklch_to_rgb(*l, *c, *h)),
        }
    }

    pub fn to_dsl(&self) -> String {
        match self {
            Self::Reset => "default".to_string(),
            Self::Rgb { r, g, b } => format!("rgb({r}, {g}, {b})"),
            Self::Oklch { l, c, h } => format!("oklch({l}, {c}, {h})"),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_dsl())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("unknown color name '{0}'")]
    UnknownName(String),

    #[error("invalid hex color '{0}', expected #rrggbb")]
    InvalidHex(String),

    #[error("expected {expected} components in '{input}', found {found}")]
    ComponentCount {
        input: String,
        expected: usize,
        found: usize,
    },

    #[error("invalid component '{component}' in '{input}'")]
    InvalidComponent { input: String, component: String },
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Accepts `default`, a color name, `#rrggbb`, `rgb(r, g, b)` or `oklch(l, c, h)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_ascii_lowercase();

        if input == "default" || input == "reset" {
            return Ok(Color::Reset);
        }

        if let Some(hex) = input.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ParseColorError::InvalidHex(input.clone()));
        }

        if let Some(args) = function_args(&input, "rgb") {
            let [r, g, b] = components::<u8>(&input, args)?;
            return Ok(Color::rgb(r, g, b));
        }

        if let Some(args) = function_args(&input, "oklch") {
            let [l, c, h] = components::<f32>(&input, args)?;
            return Ok(Color::oklch(l, c, h));
        }

        NAMED
            .iter()
            .find(|(name, _)| *name == input)
            .map(|(_, color)| *color)
            .ok_or(ParseColorError::UnknownName(input))
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// `name(a, b, c)` -> `Some("a, b, c")`
fn function_args<'a>(input: &'a str, name: &str) -> Option<&'a str> {
    input
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn components<T: FromStr>(input: &str, args: &str) -> Result<[T; 3], ParseColorError> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(ParseColorError::ComponentCount {
            input: input.to_string(),
            expected: 3,
            found: parts.len(),
        });
    }

    let parse = |part: &str| {
        part.parse::<T>()
            .map_err(|_| ParseColorError::InvalidComponent {
                input: input.to_string(),
                component: part.to_string(),
            })
    };
    Ok([parse(parts[0])?, parse(parts[1])?, parse(parts[2])?])
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}
