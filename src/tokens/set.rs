//! The fixed-shape token set.

use std::ops::Index;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::key::TokenKey;
use super::metadata::Category;
use crate::color::Color;

/// One value for every [`TokenKey`].
///
/// A token set is produced whole by the derivation engine and never
/// updated in place, so all of its values come from the same base color.
/// Iteration follows [`TokenKey::ALL`].
#[derive(Debug, Clone, PartialEq)]
pub struct TokenSet {
    values: [Color; TokenKey::COUNT],
}

/// Tokens of one category, in key order.
pub type TokenGroup = (Category, Vec<(TokenKey, Color)>);

impl TokenSet {
    /// Builds a set by asking `value` for each key in canonical order.
    pub fn from_fn(mut value: impl FnMut(TokenKey) -> Color) -> Self {
        Self {
            values: std::array::from_fn(|i| value(TokenKey::ALL[i])),
        }
    }

    /// The value of `key` by copy; `tokens[key]` borrows the same value.
    pub fn get(&self, key: TokenKey) -> Color {
        self.values[key.index()]
    }

    /// Iterates `(key, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenKey, Color)> + '_ {
        TokenKey::ALL.into_iter().zip(self.values.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Tokens grouped by [`Category::ALL`] order, skipping empty groups.
    pub fn grouped(&self) -> Vec<TokenGroup> {
        Category::ALL
            .into_iter()
            .map(|category| {
                let tokens: Vec<_> = self
                    .iter()
                    .filter(|(key, _)| key.category() == category)
                    .collect();
                (category, tokens)
            })
            .filter(|(_, tokens)| !tokens.is_empty())
            .collect()
    }

    /// The four swatches shown on a token set's preview card.
    pub fn preview_colors(&self) -> [Color; 4] {
        [
            self.get(TokenKey::CheckboxFill),
            self.get(TokenKey::GradientStop1),
            self.get(TokenKey::GradientStop2),
            self.get(TokenKey::ProgressBarFill),
        ]
    }
}

impl Index<TokenKey> for TokenSet {
    type Output = Color;

    fn index(&self, key: TokenKey) -> &Color {
        &self.values[key.index()]
    }
}

impl Serialize for TokenSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key.as_str(), &value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    fn indexed_set() -> TokenSet {
        TokenSet::from_fn(|key| Color::Solid(Rgb::new(key.index() as u8, 0, 0)))
    }

    #[test]
    fn test_from_fn_fills_every_key() {
        let set = indexed_set();
        assert_eq!(set.len(), TokenKey::COUNT);
        for key in TokenKey::ALL {
            assert_eq!(set.get(key).rgb().r as usize, key.index());
            assert_eq!(set[key], set.get(key));
        }
    }

    #[test]
    fn test_iter_follows_canonical_order() {
        let keys: Vec<TokenKey> = indexed_set().iter().map(|(k, _)| k).collect();
        assert_eq!(keys, TokenKey::ALL);
    }

    #[test]
    fn test_grouped_follows_category_order() {
        let groups = indexed_set().grouped();
        let categories: Vec<Category> = groups.iter().map(|(c, _)| *c).collect();
        assert_eq!(categories, Category::ALL);

        let total: usize = groups.iter().map(|(_, tokens)| tokens.len()).sum();
        assert_eq!(total, TokenKey::COUNT);
        for (category, tokens) in &groups {
            assert!(tokens.iter().all(|(key, _)| key.category() == *category));
        }
    }

    #[test]
    fn test_preview_colors() {
        let set = indexed_set();
        let preview = set.preview_colors();
        assert_eq!(preview[0], set[TokenKey::CheckboxFill]);
        assert_eq!(preview[3], set[TokenKey::ProgressBarFill]);
    }

    #[test]
    fn test_serializes_as_ordered_map() {
        let json = serde_json::to_string(&indexed_set()).unwrap();
        assert!(json.starts_with(r##"{"checkboxFill":"#000000","radioIndicator":"#010000""##));
        assert!(json.ends_with(r##""progressBarTrack":"#1f0000"}"##));
    }
}
