//! Token color values.

use std::fmt;

use serde::{Serialize, Serializer};

use super::rgb::Rgb;

/// A token's value: a solid color or a color blended with an alpha.
///
/// Displays as `#rrggbb` or `rgba(r,g,b,a)`, the strings every exporter
/// writes.
///
/// # Example
///
/// ```rust
/// use tintsmith::color::{Color, Rgb};
///
/// let solid = Color::Solid(Rgb::new(0x11, 0x22, 0x33));
/// assert_eq!(solid.to_string(), "#112233");
///
/// let glow = Rgb::new(239, 68, 68).with_alpha(0.5);
/// assert_eq!(glow.to_string(), "rgba(239,68,68,0.5)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Solid(Rgb),
    Translucent { rgb: Rgb, alpha: f64 },
}

impl Color {
    /// The underlying channels, ignoring alpha.
    pub fn rgb(self) -> Rgb {
        match self {
            Color::Solid(rgb) | Color::Translucent { rgb, .. } => rgb,
        }
    }

    /// Alpha of the value; `1.0` for solid colors.
    pub fn alpha(self) -> f64 {
        match self {
            Color::Solid(_) => 1.0,
            Color::Translucent { alpha, .. } => alpha,
        }
    }

    pub fn is_solid(self) -> bool {
        matches!(self, Color::Solid(_))
    }
}

impl Rgb {
    /// Pairs the color with an alpha.
    pub fn with_alpha(self, alpha: f64) -> Color {
        Color::Translucent { rgb: self, alpha }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Solid(rgb)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Solid(rgb) => write!(f, "{}", rgb),
            Color::Translucent { rgb, alpha } => f.write_str(&rgb.rgba(*alpha)),
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_display() {
        assert_eq!(Color::from(Rgb::WHITE).to_string(), "#ffffff");
    }

    #[test]
    fn test_translucent_display() {
        assert_eq!(Rgb::BLACK.with_alpha(0.08).to_string(), "rgba(0,0,0,0.08)");
    }

    #[test]
    fn test_rgb_and_alpha_accessors() {
        let c = Rgb::new(1, 2, 3).with_alpha(0.3);
        assert_eq!(c.rgb(), Rgb::new(1, 2, 3));
        assert_eq!(c.alpha(), 0.3);
        assert!(!c.is_solid());
        assert_eq!(Color::Solid(Rgb::BLACK).alpha(), 1.0);
    }

    #[test]
    fn test_serialize_as_string() {
        let json = serde_json::to_string(&Rgb::new(255, 0, 0).with_alpha(0.5)).unwrap();
        assert_eq!(json, "\"rgba(255,0,0,0.5)\"");
    }
}
