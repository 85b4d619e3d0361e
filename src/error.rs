//! Configuration errors.
//!
//! Everything that can go wrong in this crate goes wrong while a dataset is
//! being built. The per-frame path never fails.

use std::fmt;

/// Errors raised while building entity datasets or parsing a scene description.
#[derive(Debug)]
pub enum ConfigError {
    /// A layer was configured with zero entities.
    EmptyDataset,
    /// A layer asks for more entities than a frame can carry.
    TooManyEntities { count: usize, max: usize },
    /// An ornament layer was configured without colors to draw from.
    EmptyPalette,
    /// A palette entry is not a `#RRGGBB` or `#RGB` hex color.
    InvalidColor(String),
    /// A formation dimension (height, radius) is not a positive finite number.
    InvalidShape { field: &'static str, value: f32 },
    /// A motion parameter is negative or not finite.
    InvalidMotion { field: &'static str, value: f32 },
    /// The YAML scene description could not be parsed.
    Parse(serde_yaml::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyDataset => write!(f, "Entity count must be greater than zero"),
            ConfigError::TooManyEntities { count, max } => {
                write!(f, "Entity count {} exceeds the limit of {}", count, max)
            }
            ConfigError::EmptyPalette => write!(f, "Ornament layers require a non-empty color palette"),
            ConfigError::InvalidColor(value) => write!(f, "Invalid hex color '{}'", value),
            ConfigError::InvalidShape { field, value } => {
                write!(f, "Shape field '{}' must be positive and finite, got {}", field, value)
            }
            ConfigError::InvalidMotion { field, value } => {
                write!(f, "Motion field '{}' must be non-negative and finite, got {}", field, value)
            }
            ConfigError::Parse(e) => write!(f, "YAML parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(e: serde_yaml::Error) -> Self {
        ConfigError::Parse(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_messages() {
        assert!(ConfigError::EmptyPalette.to_string().contains("palette"));
        assert!(ConfigError::InvalidColor("#zz".into()).to_string().contains("#zz"));

        let shape = ConfigError::InvalidShape { field: "height", value: -1.0 };
        assert!(shape.to_string().contains("height"));

        let many = ConfigError::TooManyEntities { count: 250_000, max: 100_000 };
        assert!(many.to_string().contains("250000"));
    }

    #[test]
    fn test_parse_error_has_source() {
        let yaml_err = serde_yaml::from_str::<u32>("not a number").unwrap_err();
        let err = ConfigError::from(yaml_err);
        assert!(err.source().is_some());
        assert!(ConfigError::EmptyDataset.source().is_none());
    }
}
