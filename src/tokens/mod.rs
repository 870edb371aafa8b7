//! UI color tokens and their derivation.
//!
//! This module provides:
//!
//! - [`TokenKey`]: The closed set of token identifiers
//! - [`TokenSet`]: One value per key, produced whole
//! - [`generate_tokens`]: Derives a token set from a base color and [`Mode`]
//! - [`Palette`]: The intermediate primitives tokens are assembled from
//! - [`TokenMeta`] / [`TOKEN_METADATA`]: Labels, categories and descriptions
//!
//! [`Mode`]: crate::theme::Mode

mod generate;
mod key;
mod metadata;
mod set;

pub use generate::{generate_tokens, BackgroundScale, Palette, ERROR_RED};
pub use key::{TokenKey, UnknownTokenKey};
pub use metadata::{Category, TokenMeta, TOKEN_METADATA};
pub use set::{TokenGroup, TokenSet};
