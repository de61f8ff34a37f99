//! Error types for the color module
//!
//! Every failure the parsing and conversion pipeline can produce is a
//! variant of [`ColorError`]. Nothing in the pipeline panics on user input.

use thiserror::Error;

/// Main error type for color parsing, conversion and comparison
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// A field could not be read as a real number
    #[error("invalid {field} value '{value}': not a number")]
    NotNumeric { field: String, value: String },

    /// A field was below zero, which is never clamped
    #[error("{field} value cannot be negative: {value}")]
    NegativeValue { field: String, value: String },

    /// No grammar matched the trimmed input
    #[error("unrecognized color format: {input}")]
    Unrecognized { input: String },

    /// Target format is not one of the supported names
    #[error("invalid target format: {format} (supported: {supported})")]
    InvalidTargetFormat { format: String, supported: String },

    /// Conversion input failed to parse
    #[error("failed to detect color format: {source}")]
    DetectionFailed {
        #[source]
        source: Box<ColorError>,
    },

    /// One side of a comparison failed to parse
    #[error("invalid {which}: {source}")]
    InvalidColor {
        which: String,
        #[source]
        source: Box<ColorError>,
    },
}

/// Result type alias for color operations
pub type ColorResult<T> = Result<T, ColorError>;

impl ColorError {
    pub(crate) fn not_numeric(field: &str, value: &str) -> Self {
        ColorError::NotNumeric {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    pub(crate) fn negative(field: &str, value: &str) -> Self {
        ColorError::NegativeValue {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    pub(crate) fn detection(source: ColorError) -> Self {
        ColorError::DetectionFailed {
            source: Box::new(source),
        }
    }

    pub(crate) fn unrecognized(input: &str) -> Self {
        ColorError::Unrecognized {
            input: input.to_string(),
        }
    }

    /// Wrap a detection error with the name of the input that caused it
    pub(crate) fn for_input(self, which: &str) -> Self {
        ColorError::InvalidColor {
            which: which.to_string(),
            source: Box::new(self),
        }
    }
}
