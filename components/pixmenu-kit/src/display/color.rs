use serde::{Deserialize, Serialize};
use thiserror::Error;

/// RGBW color as consumed by small display drivers
///
/// Monochrome drivers only look at whether a color is "on"; the `w` channel
/// carries the white component for RGBW panels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub w: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color `{0}` must start with '#'")]
    MissingHash(String),
    #[error("color `{0}` must have 6 or 8 hex digits")]
    InvalidLength(String),
    #[error("color `{0}` contains a non-hex digit")]
    InvalidDigit(String),
}

impl Color {
    /// Fully lit pixel
    pub const ON: Color = Color::new(255, 255, 255, 255);
    /// Unlit pixel
    pub const OFF: Color = Color::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, w: u8) -> Self {
        Self { r, g, b, w }
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0)
    }

    /// Whether a monochrome panel would light this pixel
    pub fn is_on(&self) -> bool {
        self.r != 0 || self.g != 0 || self.b != 0 || self.w != 0
    }

    /// Parse `#RRGGBB` or `#RRGGBBWW`
    pub fn from_hex(value: &str) -> Result<Self, ColorParseError> {
        let digits = value
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(value.to_string()))?;

        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorParseError::InvalidLength(value.to_string()));
        }

        let channel = |index: usize| -> Result<u8, ColorParseError> {
            digits
                .get(index * 2..index * 2 + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| ColorParseError::InvalidDigit(value.to_string()))
        };

        let w = if digits.len() == 8 { channel(3)? } else { 0 };
        Ok(Self::new(channel(0)?, channel(1)?, channel(2)?, w))
    }

    pub fn to_hex(&self) -> String {
        if self.w == 0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.w)
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}
