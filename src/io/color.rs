//! Canonical `#RRGGBB` color values and normalization of foreign color strings

use crate::io::error::{GenerationError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An opaque RGB color, displayed in canonical uppercase `#RRGGBB` form
///
/// Every color entering the crate is normalized through [`ColorValue::parse`],
/// so equality on this type is the lookup key for palettes and neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorValue([u8; 3]);

impl ColorValue {
    /// Create a color from its channels
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self([red, green, blue])
    }

    /// Red, green and blue channels
    pub const fn rgb(self) -> [u8; 3] {
        self.0
    }

    /// Channels with a fully opaque alpha appended
    pub const fn rgba(self) -> [u8; 4] {
        let [red, green, blue] = self.0;
        [red, green, blue, u8::MAX]
    }

    /// Normalize a color string
    ///
    /// Accepts `#RRGGBB`, `RRGGBB`, short `#RGB` and computed-style
    /// `rgb(r, g, b)` forms, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidColor`] if the string matches none of
    /// the accepted forms.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let lowered = trimmed.to_ascii_lowercase();

        if let Some(body) = lowered
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_functional(input, body);
        }

        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid_color(input, &"non-hexadecimal digit"));
        }
        match digits.len() {
            6 => {
                let value = u32::from_str_radix(digits, 16)
                    .map_err(|e| invalid_color(input, &e))?;
                let [_, red, green, blue] = value.to_be_bytes();
                Ok(Self([red, green, blue]))
            }
            3 => {
                let value = u16::from_str_radix(digits, 16)
                    .map_err(|e| invalid_color(input, &e))?;
                // Each nibble doubles: #ABC == #AABBCC
                let expand = |nibble: u16| ((nibble & 0xF) as u8) * 0x11;
                Ok(Self([expand(value >> 8), expand(value >> 4), expand(value)]))
            }
            _ => Err(invalid_color(input, &"expected #RRGGBB, #RGB or rgb(r, g, b)")),
        }
    }
}

fn parse_functional(input: &str, body: &str) -> Result<ColorValue> {
    let channels = body
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<u8>()
                .map_err(|e| invalid_color(input, &e))
        })
        .collect::<Result<Vec<u8>>>()?;

    match channels.as_slice() {
        &[red, green, blue] => Ok(ColorValue([red, green, blue])),
        _ => Err(invalid_color(input, &"rgb() takes exactly three channels")),
    }
}

fn invalid_color(value: &str, reason: &impl ToString) -> GenerationError {
    GenerationError::InvalidColor {
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [red, green, blue] = self.0;
        write!(f, "#{red:02X}{green:02X}{blue:02X}")
    }
}

impl FromStr for ColorValue {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ColorValue {
    type Error = GenerationError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<ColorValue> for String {
    fn from(color: ColorValue) -> Self {
        color.to_string()
    }
}
