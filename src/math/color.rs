use serde::{Deserialize, Serialize};
use crate::error::ConfigError;

/// Linear RGB color with components in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` or the `#RGB` shorthand. The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidColor(hex.to_string());
        let digits = hex.trim().trim_start_matches('#');

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let (r, g, b) = match digits.len() {
            6 => (
                u8::from_str_radix(&digits[0..2], 16).map_err(|_| invalid())?,
                u8::from_str_radix(&digits[2..4], 16).map_err(|_| invalid())?,
                u8::from_str_radix(&digits[4..6], 16).map_err(|_| invalid())?,
            ),
            3 => {
                let nibble = |i: usize| {
                    u8::from_str_radix(&digits[i..i + 1], 16)
                        .map(|v| v * 17)
                        .map_err(|_| invalid())
                };
                (nibble(0)?, nibble(1)?, nibble(2)?)
            }
            _ => return Err(invalid()),
        };

        Ok(Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        })
    }

    pub fn to_hex(&self) -> String {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02X}{:02X}{:02X}", channel(self.r), channel(self.g), channel(self.b))
    }

    pub fn to_array(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}
