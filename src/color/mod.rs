//! Color format detection, conversion and comparison
//!
//! The pipeline is one-directional:
//! - `parser` classifies an input string into one grammar and resolves its
//!   fields through `channel` into a canonical `Color`
//! - `transform` holds the numeric color-space conversions
//! - `converter` renders a canonical color in a target format
//! - `compare` derives perceptual, component and contrast metrics

pub mod channel;
pub mod compare;
pub mod constants;
pub mod converter;
pub mod error;
pub mod model;
pub mod parser;
pub mod transform;

pub use compare::{compare, format_basic, format_detailed, ComparisonResult, Verdict, WcagGrade};
pub use converter::{convert, render, supported_formats};
pub use error::{ColorError, ColorResult};
pub use model::{Color, ColorData, Format};
pub use parser::{detect_format, detect_input_format};

#[cfg(test)]
mod channel_tests;
#[cfg(test)]
mod transform_tests;
