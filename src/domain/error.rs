//! Configuration errors.
//!
//! The physics step itself cannot fail; everything that can go wrong is
//! caught once, when a configuration is built or a setting is changed.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The JSON handed in from JS did not parse.
    Parse(String),
    /// `count` must be at least 1.
    EmptyCount,
    /// A value that must be finite was NaN or infinite.
    NotFinite(&'static str),
    /// `friction` outside `(0, 1]`.
    Friction(f32),
    /// `wallBounce` outside `[0, 1]`.
    WallBounce(f32),
    /// A value that must be strictly positive was not.
    NotPositive(&'static str, f32),
    /// A value that must be zero or more was negative.
    Negative(&'static str, f32),
    /// `maxSize` smaller than `minSize`.
    SizeRange { min: f32, max: f32 },
    /// `attractorSmoothing` outside `(0, 1]`.
    Smoothing(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "invalid ballpit config JSON: {}", msg),
            ConfigError::EmptyCount => write!(f, "count must be at least 1"),
            ConfigError::NotFinite(field) => write!(f, "{} must be a finite number", field),
            ConfigError::Friction(v) => write!(f, "friction must be in (0, 1], got {}", v),
            ConfigError::WallBounce(v) => write!(f, "wallBounce must be in [0, 1], got {}", v),
            ConfigError::NotPositive(field, v) => write!(f, "{} must be > 0, got {}", field, v),
            ConfigError::Negative(field, v) => write!(f, "{} must be >= 0, got {}", field, v),
            ConfigError::SizeRange { min, max } => {
                write!(f, "maxSize ({}) must not be smaller than minSize ({})", max, min)
            }
            ConfigError::Smoothing(v) => {
                write!(f, "attractorSmoothing must be in (0, 1], got {}", v)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}
