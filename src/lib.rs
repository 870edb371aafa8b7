//! # Tintsmith - UI color tokens from a single brand color
//!
//! Tintsmith derives a complete set of UI color tokens (form controls,
//! layout surfaces, visual effects, browser chrome) from one base color and
//! a light/dark [`Mode`], and serializes any token set into stylesheet,
//! config and JSON formats.
//!
//! ## Core Concepts
//!
//! - [`generate_tokens`]: Base color + mode in, complete [`TokenSet`] out
//! - [`TokenKey`]: The closed set of token identifiers; a [`TokenSet`]
//!   always has exactly one value per key
//! - [`TokenMeta`]: Label, category, custom-property name and description
//!   for each key
//! - [`ExportFormat`]: Six textual formats, selectable by id through
//!   [`export::serialize`]
//!
//! ## Quick Start
//!
//! ```rust
//! use tintsmith::{export, generate_tokens, theme_name, Mode, TokenKey};
//!
//! let tokens = generate_tokens("#6366F1", Mode::Dark).unwrap();
//! assert_eq!(tokens[TokenKey::GlowEffect].to_string(), "rgba(100,103,242,0.5)");
//!
//! let name = theme_name("#6366F1", Mode::Dark);
//! let css = export::serialize("css", tokens.iter(), &name).unwrap();
//! assert!(css.starts_with("/* Custom Indigo Dark — CSS Custom Properties */"));
//! ```
//!
//! ## Purity
//!
//! Derivation and serialization read only their arguments and the static
//! metadata and format tables. Calls may run concurrently and identical
//! inputs always give identical output, so callers can memoize on
//! `(base color, mode)`.
//!
//! ## Input validation
//!
//! Color strings must be `#` followed by exactly six hex digits; anything
//! else is rejected with [`ColorError::InvalidColorFormat`]. Display names
//! passed to exporters are embedded verbatim into comments and string
//! literals of the text formats and are not escaped.

pub mod color;
pub mod export;
pub mod preview;
pub mod theme;
pub mod tokens;

pub use color::{Color, ColorError, Hsl, Rgb};
pub use export::{ExportError, ExportFormat, ExportFormatDescriptor, EXPORT_FORMATS};
pub use theme::{set_mode_detector, theme_name, Mode, Preset, PRESETS};
pub use tokens::{generate_tokens, Category, TokenKey, TokenMeta, TokenSet, TOKEN_METADATA};
