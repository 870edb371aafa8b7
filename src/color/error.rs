//! Color parsing errors.

use thiserror::Error;

/// Error returned when a color string cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input is not `#` followed by exactly six hex digits.
    #[error("invalid color '{input}': expected '#' followed by six hex digits")]
    InvalidColorFormat { input: String },
}

impl ColorError {
    pub(crate) fn invalid(input: &str) -> Self {
        ColorError::InvalidColorFormat {
            input: input.to_string(),
        }
    }
}
