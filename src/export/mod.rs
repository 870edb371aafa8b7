//! Serialization of token sets into textual formats.
//!
//! This module provides:
//!
//! - [`ExportFormat`]: The closed set of formats, dispatched by `match`
//! - [`EXPORT_FORMATS`]: Ordered registry with labels for each format
//! - [`serialize`]: Format lookup by id plus serialization
//! - [`to_kebab`]: The camelCase to hyphen-case rule the CSS and SCSS
//!   formats apply to token keys
//!
//! # Formats
//!
//! | id | Output |
//! |----|--------|
//! | `css` | Custom properties inside `:root { }` |
//! | `tailwind` | `module.exports` config with `theme.extend.colors` |
//! | `json` | `{ name, tokens: { key: { value, cssVar, category, description } } }` |
//! | `scss` | `$var: value;` lines grouped by category |
//! | `design-tokens` | `{ name: { category: { key: { $value, $type, $description } } } }` |
//! | `style-object` | `export const theme = { key: 'value' }` |
//!
//! The SCSS and design-token formats group tokens by category in the order
//! categories are first seen in the input, not the canonical order.
//!
//! # Example
//!
//! ```rust
//! use tintsmith::{export, TokenKey};
//!
//! let tokens = [(TokenKey::CheckboxFill, "#112233")];
//! let css = export::serialize("css", tokens, "Test").unwrap();
//! assert!(css.contains("--checkbox-fill: #112233;"));
//! ```

mod case;
mod error;
mod format;
mod json;
mod text;

use std::fmt;

use serde::Serialize;

use crate::tokens::{Category, TokenKey};

pub use case::to_kebab;
pub use error::ExportError;
pub use format::{ExportFormat, ExportFormatDescriptor, EXPORT_FORMATS};

/// Serializes `tokens` with the format whose id is `format_id`.
///
/// # Errors
///
/// Returns [`ExportError::UnknownFormat`] if `format_id` is not one of the
/// ids in [`EXPORT_FORMATS`], or a renderer error from
/// [`ExportFormat::serialize`].
pub fn serialize<I, V>(format_id: &str, tokens: I, name: &str) -> Result<String, ExportError>
where
    I: IntoIterator<Item = (TokenKey, V)>,
    V: fmt::Display,
{
    format_id.parse::<ExportFormat>()?.serialize(tokens, name)
}

/// A token with its value already rendered to text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct TokenEntry {
    key: TokenKey,
    value: String,
}

impl TokenEntry {
    pub(crate) fn new(key: TokenKey, value: impl fmt::Display) -> Self {
        Self {
            key,
            value: value.to_string(),
        }
    }
}

/// Renders `tokens` into entries holding each key at most once.
///
/// A repeated key stays at the position it was first seen and takes the
/// last value given for it.
pub(crate) fn collect_entries<I, V>(tokens: I) -> Vec<TokenEntry>
where
    I: IntoIterator<Item = (TokenKey, V)>,
    V: fmt::Display,
{
    let mut slots = [None::<usize>; TokenKey::COUNT];
    let mut entries = Vec::new();
    for (key, value) in tokens {
        let entry = TokenEntry::new(key, value);
        match slots[key.index()] {
            Some(at) => entries[at] = entry,
            None => {
                slots[key.index()] = Some(entries.len());
                entries.push(entry);
            }
        }
    }
    entries
}

/// Tokens sharing a category.
#[derive(Debug, Serialize)]
pub(crate) struct EntryGroup<'a> {
    category: Category,
    tokens: Vec<&'a TokenEntry>,
}

/// Groups entries by category, ordering groups by first appearance.
pub(crate) fn group_first_seen(entries: &[TokenEntry]) -> Vec<EntryGroup<'_>> {
    let mut groups: Vec<EntryGroup<'_>> = Vec::new();
    for entry in entries {
        let category = entry.key.category();
        match groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.tokens.push(entry),
            None => groups.push(EntryGroup {
                category,
                tokens: vec![entry],
            }),
        }
    }
    groups
}
