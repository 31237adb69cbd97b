//! Error types for colorlist

use thiserror::Error;

/// Result type alias using the library's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for colorlist
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed hex color string
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    /// Color name is not in the registry. Carries the caller's input as given.
    #[error("Color not found: {0:?}")]
    NotFound(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl Error {
    /// True for errors that mean "no such color", as opposed to bad input.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Hex parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("{input:?} does not start with '#'")]
    MissingPrefix { input: String },

    /// `index` is the character position in `input`, counting the `#`.
    #[error("invalid hex digit {ch:?} at position {index} in {input:?}")]
    InvalidDigit {
        input: String,
        ch: char,
        index: usize,
    },

    #[error("{input:?} has {len} hex digits, expected 3 or 6")]
    InvalidLength { input: String, len: usize },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadFailed(String, String),

    #[error("Failed to parse config: {0}")]
    ParseFailed(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_keeps_caller_input() {
        let err = Error::NotFound("WhiteSmok".to_string());
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Color not found: \"WhiteSmok\"");
    }

    #[test]
    fn format_error_converts() {
        let err: Error = FormatError::InvalidLength {
            input: "#cccc".to_string(),
            len: 4,
        }
        .into();
        assert!(!err.is_not_found());
        assert_eq!(
            err.to_string(),
            "Format error: \"#cccc\" has 4 hex digits, expected 3 or 6"
        );
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::ReadFailed("colors.toml".to_string(), "denied".to_string());
        assert_eq!(
            err.to_string(),
            "Failed to read config file colors.toml: denied"
        );
    }
}
