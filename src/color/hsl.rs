//! HSL decomposition and re-encoding.

use super::error::ColorError;
use super::rgb::Rgb;

/// A hue/saturation/lightness triple.
///
/// `h` is in degrees, `s` and `l` in percent. Values produced by
/// [`hex_to_hsl`] are rounded to whole numbers with `h` in `[0, 360)`; values
/// built by hand may lie anywhere, since [`derive`] clamps and
/// [`hsl_to_hex`] wraps the hue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Re-encodes the triple as lowercase `#rrggbb`, clamping `s` and `l`.
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }

    /// Converts to RGB, clamping `s` and `l` into `[0, 100]`.
    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self.h, self.s.clamp(0.0, 100.0), self.l.clamp(0.0, 100.0))
    }
}

/// Decomposes a `#RRGGBB` string into integer-rounded HSL.
///
/// # Example
///
/// ```rust
/// use tintsmith::color::{hex_to_hsl, Hsl};
///
/// assert_eq!(hex_to_hsl("#6366F1").unwrap(), Hsl::new(239.0, 84.0, 67.0));
/// ```
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] if `hex` is not a six-digit
/// hex color.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl, ColorError> {
    Rgb::parse_hex(hex).map(Rgb::to_hsl)
}

/// Converts HSL to lowercase `#rrggbb`.
///
/// The hue is taken modulo 360, so `390.0` and `30.0` encode identically and
/// negative hues wrap backwards. Saturation and lightness are not clamped
/// here; each output channel is clamped to `[0, 255]` after rounding.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    hsl_to_rgb(h, s, l).to_hex()
}

/// Converts HSL to [`Rgb`] with the same rules as [`hsl_to_hex`].
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let h = h.rem_euclid(360.0);
    let s = s / 100.0;
    let l = l / 100.0;

    let k = |n: f64| (n + h / 30.0).rem_euclid(12.0);
    let a = s * l.min(1.0 - l);
    let f = |n: f64| {
        let k = k(n);
        l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0)
    };

    Rgb::new(channel(f(0.0)), channel(f(8.0)), channel(f(4.0)))
}

/// Like [`hsl_to_hex`], but clamps `s` and `l` into `[0, 100]` first.
///
/// The token engine pushes offsets through here freely; the clamp keeps
/// every result a valid color.
///
/// # Example
///
/// ```rust
/// use tintsmith::color::derive;
///
/// assert_eq!(derive(390.0, 50.0, 50.0), derive(30.0, 50.0, 50.0));
/// assert_eq!(derive(0.0, 150.0, -20.0), "#000000");
/// ```
pub fn derive(h: f64, s: f64, l: f64) -> String {
    Hsl::new(h, s, l).to_hex()
}

fn channel(x: f64) -> u8 {
    (x * 255.0).round().clamp(0.0, 255.0) as u8
}
