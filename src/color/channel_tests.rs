//! Tests for the channel value model

use crate::color::channel::*;
use crate::color::error::ColorError;

#[test]
fn test_channel_value_as_fraction() {
    let cases = [
        ("0.5", false, 0.5),
        ("50", true, 0.5),
        ("100", true, 1.0),
        ("0", true, 0.0),
    ];
    for (text, is_percent, expected) in cases {
        let cv = parse_channel("test", text, is_percent).unwrap();
        assert_eq!(cv.as_fraction(), expected, "input {} (percent: {})", text, is_percent);
    }
}

#[test]
fn test_channel_value_as_255() {
    let cv = parse_channel("red", "50", true).unwrap();
    assert_eq!(cv.as_255(), 127.5);
    assert!(cv.is_percent());

    let cv = parse_channel("red", "200", false).unwrap();
    assert_eq!(cv.as_255(), 200.0);
}

#[test]
fn test_rgb_channel_to_rgb() {
    assert_eq!(RgbChannel::parse("red", "255", false).unwrap().to_rgb(), 255.0);
    assert_eq!(RgbChannel::parse("red", "100", true).unwrap().to_rgb(), 255.0);
    assert_eq!(RgbChannel::parse("red", "50", true).unwrap().to_rgb(), 127.5);
    // Out of range high is clamped silently
    assert_eq!(RgbChannel::parse("red", "300", false).unwrap().to_rgb(), 255.0);
    assert_eq!(RgbChannel::parse("red", "150", true).unwrap().to_rgb(), 255.0);
}

#[test]
fn test_lightness_channel_to_fraction() {
    assert_eq!(LightnessChannel::parse("lightness", "0.5", false).unwrap().to_fraction(), 0.5);
    assert_eq!(LightnessChannel::parse("lightness", "50", true).unwrap().to_fraction(), 0.5);
    assert_eq!(LightnessChannel::parse("lightness", "100", true).unwrap().to_fraction(), 1.0);
    assert_eq!(LightnessChannel::parse("lightness", "1.0", false).unwrap().to_fraction(), 1.0);
    assert_eq!(LightnessChannel::parse("lightness", "1.7", false).unwrap().to_fraction(), 1.0);
}

#[test]
fn test_chroma_channel_clamps() {
    assert_eq!(ChromaChannel::parse("chroma", "0").unwrap().value(), 0.0);
    assert_eq!(ChromaChannel::parse("chroma", "0.4").unwrap().value(), 0.4);
    assert_eq!(ChromaChannel::parse("chroma", "1.0").unwrap().value(), 0.4);
    assert_eq!(ChromaChannel::parse("chroma", "0.1").unwrap().value(), 0.1);
}

#[test]
fn test_hue_channel_clamps() {
    for (text, expected) in [("0", 0.0), ("90", 90.0), ("270", 270.0), ("360", 360.0), ("400", 360.0)] {
        assert_eq!(HueChannel::parse("hue", text).unwrap().value(), expected);
    }
}

#[test]
fn test_percent_and_alpha_channels_clamp() {
    assert_eq!(PercentChannel::parse("saturation", "120").unwrap().value(), 100.0);
    assert_eq!(AlphaChannel::parse("1.5").unwrap().value(), 1.0);
    assert_eq!(AlphaChannel::parse(".25").unwrap().value(), 0.25);
    assert_eq!(AlphaChannel::parse_optional(None).unwrap(), 1.0);
}

#[test]
fn test_negative_values_are_rejected() {
    let err = parse_channel("red", "-10", false).unwrap_err();
    assert!(matches!(err, ColorError::NegativeValue { .. }));

    assert!(matches!(
        HueChannel::parse("hue", "-10").unwrap_err(),
        ColorError::NegativeValue { .. }
    ));
    assert!(matches!(
        ChromaChannel::parse("chroma", "-10").unwrap_err(),
        ColorError::NegativeValue { .. }
    ));
    assert!(matches!(
        RgbChannel::parse("red", "-10", true).unwrap_err(),
        ColorError::NegativeValue { .. }
    ));
}

#[test]
fn test_non_numeric_values_are_rejected() {
    let err = parse_channel("green", "abc", false).unwrap_err();
    assert_eq!(
        err,
        ColorError::NotNumeric { field: "green".to_string(), value: "abc".to_string() }
    );
    assert!(matches!(parse_number("x", "NaN").unwrap_err(), ColorError::NotNumeric { .. }));
    assert!(matches!(parse_number("x", "").unwrap_err(), ColorError::NotNumeric { .. }));
}

#[test]
fn test_parse_number_allows_signed_values() {
    assert_eq!(parse_number("a", "-50").unwrap(), -50.0);
    assert_eq!(parse_number("a", ".5").unwrap(), 0.5);
}
