use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ColorTimeError, Result};

// Luma weights applied by `greyscale`
const GREY_RED: f64 = 0.3;
const GREY_GREEN: f64 = 0.59;
const GREY_BLUE: f64 = 0.11;

/// An opaque 8-bit RGB color. Parsed from any CSS color string and displayed
/// as uppercase `#RRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Parses `#f00`, `#ff0000`, `rgb(255, 0, 0)`, `red` and the other CSS
    /// color forms. Alpha is discarded.
    pub fn parse(input: &str) -> Result<Self> {
        let parsed =
            csscolorparser::parse(input).map_err(|_| ColorTimeError::color_parse(input))?;
        let [r, g, b, _] = parsed.to_rgba8();
        Ok(Color { r, g, b })
    }

    /// Uppercase `#RRGGBB`.
    pub fn to_hex(&self) -> String {
        csscolorparser::Color::from_rgba8(self.r, self.g, self.b, 255)
            .to_hex_string()
            .to_uppercase()
    }

    /// Moves `t` of the way from `self` toward `target`. `t` is not clamped, so
    /// values past 1 extrapolate beyond `target`; channels saturate at 0 and 255.
    pub fn lerp(&self, target: &Color, t: f64) -> Self {
        Color {
            r: lerp_component(self.r, target.r, t),
            g: lerp_component(self.g, target.g, t),
            b: lerp_component(self.b, target.b, t),
        }
    }

    pub fn greyscale(&self) -> Self {
        let value = f64::from(self.r) * GREY_RED
            + f64::from(self.g) * GREY_GREEN
            + f64::from(self.b) * GREY_BLUE;
        let value = to_channel(value);
        Color {
            r: value,
            g: value,
            b: value,
        }
    }
}

fn lerp_component(start: u8, end: u8, t: f64) -> u8 {
    to_channel(f64::from(end) * t + f64::from(start) * (1.0 - t))
}

// Rounds half up, like the 8-bit hex formatters of most color libraries.
fn to_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, 255.0).round() as u8
}

/// Blends the color of the lower bounding anchor toward the upper one.
/// A weight of 0 yields `lower`, a weight of 1 yields `upper`.
pub fn blend(lower: &Color, upper: &Color, weight: f64) -> Color {
    lower.lerp(upper, weight)
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorTimeError;

    fn from_str(s: &str) -> Result<Self> {
        Color::parse(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> Color {
        Color::parse(s).unwrap()
    }

    #[test]
    fn test_parse_short_and_long_hex() {
        assert_eq!(hex("#f00"), Color::new(255, 0, 0));
        assert_eq!(hex("#00ff00"), Color::new(0, 255, 0));
        assert_eq!(hex("blue"), Color::new(0, 0, 255));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            Color::parse("not-a-color"),
            Err(ColorTimeError::ColorParse { .. })
        ));
    }

    #[test]
    fn test_hex_is_uppercase() {
        assert_eq!(Color::new(0xbf, 0x40, 0x00).to_hex(), "#BF4000");
        assert_eq!(hex("#abcdef").to_string(), "#ABCDEF");
    }

    #[test]
    fn test_blend_quarter_way() {
        assert_eq!(blend(&hex("#f00"), &hex("#0f0"), 0.25).to_hex(), "#BF4000");
    }

    #[test]
    fn test_blend_endpoints() {
        let red = hex("#f00");
        let green = hex("#0f0");
        assert_eq!(blend(&red, &green, 0.0), red);
        assert_eq!(blend(&red, &green, 1.0), green);
    }

    #[test]
    fn test_greyscale_rounds_luma() {
        // 255 * 0.3 = 76.5 rounds up
        assert_eq!(hex("#f00").greyscale(), Color::new(77, 77, 77));
        assert_eq!(hex("#fff").greyscale(), Color::new(255, 255, 255));
    }

    #[test]
    fn test_lerp_extrapolation_saturates() {
        let red = hex("#f00");
        let grey = red.greyscale();
        let over = red.lerp(&grey, 3.0);
        // 255 * -2 + 77 * 3 is negative
        assert_eq!(over.r, 0);
        assert_eq!(over.g, 231);
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&hex("#0f0")).unwrap();
        assert_eq!(json, "\"#00FF00\"");
        let back: Color = serde_json::from_str("\"#00f\"").unwrap();
        assert_eq!(back, Color::new(0, 0, 255));
    }
}
