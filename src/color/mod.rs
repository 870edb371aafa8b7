//! Color-space helpers.
//!
//! This module provides the numeric primitives the token engine is built on:
//!
//! - [`Rgb`]: A solid color decoded from a `#RRGGBB` string
//! - [`Hsl`]: Hue/saturation/lightness triple used as the manipulation space
//! - [`hex_to_hsl`], [`hsl_to_hex`], [`derive`]: conversions between the two
//! - [`rgba`]: Alpha-blended `rgba(r,g,b,a)` strings
//! - [`Color`]: A token value, solid or translucent
//! - [`ColorError`]: Raised when a string is not a six-digit hex color
//!
//! All functions are pure. Hex input is validated at the boundary; once a
//! value is inside the engine every conversion is total.

#[allow(clippy::module_inception)]
mod color;
mod error;
mod hsl;
mod rgb;

pub use color::Color;
pub use error::ColorError;
pub use hsl::{derive, hex_to_hsl, hsl_to_hex, hsl_to_rgb, Hsl};
pub use rgb::{rgba, Rgb};
