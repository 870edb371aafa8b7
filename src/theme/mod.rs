//! Rendering context for token derivation.
//!
//! This module provides:
//!
//! - [`Mode`]: Light or dark rendering context, with OS detection
//! - [`Preset`]: The named quick-pick base colors
//! - [`theme_name`]: Display name for a generated token set
//!
//! Mode detection goes through a replaceable detector so tests and
//! embedding applications can force a mode.

mod mode;
mod preset;

pub use mode::{set_mode_detector, Mode, ModeParseError};
pub use preset::{theme_name, Preset, PRESETS};
