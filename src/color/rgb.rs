//! Solid RGB colors and their textual forms.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::error::ColorError;
use super::hsl::Hsl;

/// A solid 8-bit-per-channel color.
///
/// Parsing accepts `#RRGGBB` in either case; formatting always emits
/// lowercase digits.
///
/// # Example
///
/// ```rust
/// use tintsmith::color::Rgb;
///
/// let indigo: Rgb = "#6366F1".parse().unwrap();
/// assert_eq!(indigo, Rgb::new(0x63, 0x66, 0xf1));
/// assert_eq!(indigo.to_hex(), "#6366f1");
/// assert_eq!(indigo.rgba(0.5), "rgba(99,102,241,0.5)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Creates a color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Decodes a `#RRGGBB` string.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] unless the input is a `#`
    /// followed by exactly six hex digits.
    pub fn parse_hex(input: &str) -> Result<Self, ColorError> {
        let digits = input
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| ColorError::invalid(input))?;

        let channel = |at: usize| {
            u8::from_str_radix(&digits[at..at + 2], 16).map_err(|_| ColorError::invalid(input))
        };

        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Encodes the color as lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Formats the color as `rgba(r,g,b,alpha)`.
    ///
    /// `alpha` is written as given. Callers pass a value in `[0, 1]`; nothing
    /// here clamps it.
    pub fn rgba(self, alpha: f64) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, alpha)
    }

    /// Decomposes the color into integer-rounded HSL.
    ///
    /// Uses the max/min-channel decomposition. Achromatic colors report a
    /// hue and saturation of zero.
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        let (h, s) = if max == min {
            (0.0, 0.0)
        } else {
            let d = max - min;
            let s = if l > 0.5 {
                d / (2.0 - max - min)
            } else {
                d / (max + min)
            };
            let h = if max == r {
                (g - b) / d + if g < b { 6.0 } else { 0.0 }
            } else if max == g {
                (b - r) / d + 2.0
            } else {
                (r - g) / d + 4.0
            };
            (h / 6.0, s)
        };

        Hsl::new(
            (h * 360.0).round().rem_euclid(360.0),
            (s * 100.0).round(),
            (l * 100.0).round(),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Formats a hex color as `rgba(r,g,b,alpha)`.
///
/// # Example
///
/// ```rust
/// assert_eq!(tintsmith::color::rgba("#FF0000", 0.5).unwrap(), "rgba(255,0,0,0.5)");
/// ```
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] if `hex` is not a six-digit
/// hex color.
pub fn rgba(hex: &str, alpha: f64) -> Result<String, ColorError> {
    Ok(Rgb::parse_hex(hex)?.rgba(alpha))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_mixed_case() {
        assert_eq!(Rgb::parse_hex("#6366F1").unwrap(), Rgb::new(99, 102, 241));
        assert_eq!(Rgb::parse_hex("#6366f1").unwrap(), Rgb::new(99, 102, 241));
    }

    #[test]
    fn test_parse_hex_rejects_malformed() {
        for bad in ["", "#", "6366F1", "#6366F", "#6366F1A", "#GGGGGG", "#12 456", "#ääää"] {
            assert_eq!(
                Rgb::parse_hex(bad),
                Err(ColorError::invalid(bad)),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn test_to_hex_is_lowercase_and_padded() {
        assert_eq!(Rgb::new(1, 2, 255).to_hex(), "#0102ff");
        assert_eq!(Rgb::new(1, 2, 255).to_string(), "#0102ff");
    }

    #[test]
    fn test_rgba_formats_alpha_verbatim() {
        assert_eq!(rgba("#FF0000", 0.5).unwrap(), "rgba(255,0,0,0.5)");
        assert_eq!(Rgb::WHITE.rgba(0.85), "rgba(255,255,255,0.85)");
        assert_eq!(Rgb::BLACK.rgba(0.08), "rgba(0,0,0,0.08)");
        assert_eq!(Rgb::BLACK.rgba(1.0), "rgba(0,0,0,1)");
    }

    #[test]
    fn test_rgba_rejects_bad_hex() {
        assert!(rgba("red", 0.5).is_err());
    }

    #[test]
    fn test_to_hsl_primaries() {
        assert_eq!(Rgb::new(255, 0, 0).to_hsl(), Hsl::new(0.0, 100.0, 50.0));
        assert_eq!(Rgb::new(0, 255, 0).to_hsl(), Hsl::new(120.0, 100.0, 50.0));
        assert_eq!(Rgb::new(0, 0, 255).to_hsl(), Hsl::new(240.0, 100.0, 50.0));
    }

    #[test]
    fn test_to_hsl_achromatic() {
        assert_eq!(Rgb::BLACK.to_hsl(), Hsl::new(0.0, 0.0, 0.0));
        assert_eq!(Rgb::WHITE.to_hsl(), Hsl::new(0.0, 0.0, 100.0));
        assert_eq!(Rgb::new(128, 128, 128).to_hsl(), Hsl::new(0.0, 0.0, 50.0));
    }

    #[test]
    fn test_to_hsl_indigo() {
        assert_eq!(Rgb::new(0x63, 0x66, 0xf1).to_hsl(), Hsl::new(239.0, 84.0, 67.0));
    }

    #[test]
    fn test_serialize_as_hex_string() {
        let json = serde_json::to_string(&Rgb::new(0x11, 0x22, 0x33)).unwrap();
        assert_eq!(json, "\"#112233\"");
    }
}
