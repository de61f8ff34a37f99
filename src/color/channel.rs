//! Channel value model
//!
//! A channel is one numeric field of a color written either as an absolute
//! number or as a percentage. All channel kinds share [`parse_channel`],
//! which rejects negative input. Each kind then applies its own silent
//! clamp to out-of-range high values.

use crate::color::constants::{
    ALPHA_MAX, ALPHA_MIN, HUE_MAX, OKLCH_C_MAX, OKLCH_L_MAX, PERCENT_MAX, RGB_MAX,
};
use crate::color::error::{ColorError, ColorResult};
use crate::color::model::clamp;

/// A non-negative number tagged with whether it was written with `%`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelValue {
    value: f64,
    is_percent: bool,
}

/// Parse any real number, signed or not
pub fn parse_number(field: &str, text: &str) -> ColorResult<f64> {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ColorError::not_numeric(field, text)),
    }
}

/// Parse a channel field. Negative values are an error, never a clamp.
pub fn parse_channel(field: &str, text: &str, is_percent: bool) -> ColorResult<ChannelValue> {
    let value = parse_number(field, text)?;
    if value < 0.0 {
        return Err(ColorError::negative(field, text));
    }
    Ok(ChannelValue { value, is_percent })
}

impl ChannelValue {
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_percent(&self) -> bool {
        self.is_percent
    }

    /// Percentages map to 0-1, absolute values pass through
    pub fn as_fraction(&self) -> f64 {
        if self.is_percent {
            self.value / PERCENT_MAX
        } else {
            self.value
        }
    }

    /// Percentages map to 0-255, absolute values pass through
    pub fn as_255(&self) -> f64 {
        if self.is_percent {
            self.value / PERCENT_MAX * RGB_MAX
        } else {
            self.value
        }
    }
}

/// An 8-bit RGB channel, absolute or percentage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbChannel(ChannelValue);

impl RgbChannel {
    pub fn parse(field: &str, text: &str, is_percent: bool) -> ColorResult<Self> {
        parse_channel(field, text, is_percent).map(Self)
    }

    /// Channel value on 0-255
    pub fn to_rgb(&self) -> f64 {
        clamp(self.0.as_255(), 0.0, RGB_MAX)
    }
}

/// OKLCH lightness, either 0-1 or 0-100%
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightnessChannel(ChannelValue);

impl LightnessChannel {
    pub fn parse(field: &str, text: &str, is_percent: bool) -> ColorResult<Self> {
        parse_channel(field, text, is_percent).map(Self)
    }

    pub fn to_fraction(&self) -> f64 {
        clamp(self.0.as_fraction(), 0.0, OKLCH_L_MAX)
    }
}

/// OKLCH chroma, clamped to 0-0.4
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChromaChannel(f64);

impl ChromaChannel {
    pub fn parse(field: &str, text: &str) -> ColorResult<Self> {
        let cv = parse_channel(field, text, false)?;
        Ok(Self(clamp(cv.value(), 0.0, OKLCH_C_MAX)))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Hue angle, clamped to 0-360
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueChannel(f64);

impl HueChannel {
    pub fn parse(field: &str, text: &str) -> ColorResult<Self> {
        let cv = parse_channel(field, text, false)?;
        Ok(Self(clamp(cv.value(), 0.0, HUE_MAX)))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// A mandatory-percentage field (saturation, lightness, value, whiteness,
/// blackness, CMYK inks), clamped to 0-100
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentChannel(f64);

impl PercentChannel {
    pub fn parse(field: &str, text: &str) -> ColorResult<Self> {
        let cv = parse_channel(field, text, true)?;
        Ok(Self(clamp(cv.value(), 0.0, PERCENT_MAX)))
    }

    /// Value on 0-100
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Alpha as a bare fraction, clamped to 0-1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlphaChannel(f64);

impl AlphaChannel {
    pub fn parse(text: &str) -> ColorResult<Self> {
        let cv = parse_channel("alpha", text, false)?;
        Ok(Self(clamp(cv.value(), ALPHA_MIN, ALPHA_MAX)))
    }

    /// Alpha from an optional field, opaque when absent
    pub fn parse_optional(text: Option<&str>) -> ColorResult<f64> {
        match text {
            Some(text) => Self::parse(text).map(|alpha| alpha.value()),
            None => Ok(ALPHA_MAX),
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}
