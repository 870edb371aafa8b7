//! JSON-based formats.
//!
//! Both documents keep token and group order as given, so maps are
//! serialized from ordered pairs rather than through a sorted map.

use serde::{Serialize, Serializer};

use super::{group_first_seen, TokenEntry};
use crate::tokens::{Category, TokenKey};

/// Ordered key/value pairs serialized as a JSON object.
struct OrderedMap<K, V>(Vec<(K, V)>);

impl<K: Serialize, V: Serialize> Serialize for OrderedMap<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(k, v)| (k, v)))
    }
}

#[derive(Serialize)]
struct ThemeFile<'a> {
    name: &'a str,
    tokens: OrderedMap<TokenKey, ThemeToken<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ThemeToken<'a> {
    value: &'a str,
    css_var: &'static str,
    category: &'static str,
    description: &'static str,
}

#[derive(Serialize)]
struct DesignToken<'a> {
    #[serde(rename = "$value")]
    value: &'a str,
    #[serde(rename = "$type")]
    kind: &'static str,
    #[serde(rename = "$description")]
    description: &'static str,
}

/// `{ name, tokens: { key: { value, cssVar, category, description } } }`
pub(crate) fn theme_json(tokens: &[TokenEntry], name: &str) -> Result<String, serde_json::Error> {
    let file = ThemeFile {
        name,
        tokens: OrderedMap(
            tokens
                .iter()
                .map(|entry| {
                    let meta = entry.key.metadata();
                    let token = ThemeToken {
                        value: &entry.value,
                        css_var: meta.css_var,
                        category: meta.category.label(),
                        description: meta.description,
                    };
                    (entry.key, token)
                })
                .collect(),
        ),
    };
    serde_json::to_string_pretty(&file)
}

/// `{ name: { category: { key: { $value, $type, $description } } } }`
pub(crate) fn design_tokens(tokens: &[TokenEntry], name: &str) -> Result<String, serde_json::Error> {
    let groups: Vec<(Category, OrderedMap<TokenKey, DesignToken<'_>>)> = group_first_seen(tokens)
        .into_iter()
        .map(|group| {
            let members = group
                .tokens
                .into_iter()
                .map(|entry| {
                    let token = DesignToken {
                        value: &entry.value,
                        kind: "color",
                        description: entry.key.description(),
                    };
                    (entry.key, token)
                })
                .collect();
            (group.category, OrderedMap(members))
        })
        .collect();

    serde_json::to_string_pretty(&OrderedMap(vec![(name, OrderedMap(groups))]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<TokenEntry> {
        vec![
            TokenEntry::new(TokenKey::GradientStop1, "#112233"),
            TokenEntry::new(TokenKey::CheckboxFill, "#445566"),
        ]
    }

    #[test]
    fn test_theme_json_layout() {
        let out = theme_json(&entries(), "Test").unwrap();
        let expected = r##"{
  "name": "Test",
  "tokens": {
    "gradientStop1": {
      "value": "#112233",
      "cssVar": "--gradient-stop-1",
      "category": "Animation & Visual FX",
      "description": "First color stop for UI gradients"
    },
    "checkboxFill": {
      "value": "#445566",
      "cssVar": "--checkbox-fill",
      "category": "Interactive & Form",
      "description": "Background color of checked checkboxes"
    }
  }
}"##;
        assert_eq!(out, expected);
    }

    #[test]
    fn test_design_tokens_groups_in_first_seen_order() {
        let out = design_tokens(&entries(), "Test").unwrap();
        let expected = r##"{
  "Test": {
    "Animation & Visual FX": {
      "gradientStop1": {
        "$value": "#112233",
        "$type": "color",
        "$description": "First color stop for UI gradients"
      }
    },
    "Interactive & Form": {
      "checkboxFill": {
        "$value": "#445566",
        "$type": "color",
        "$description": "Background color of checked checkboxes"
      }
    }
  }
}"##;
        assert_eq!(out, expected);
    }

    #[test]
    fn test_name_with_quotes_is_escaped_by_json() {
        let out = theme_json(&entries(), r#"Say "hi""#).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["name"], r#"Say "hi""#);
    }

    #[test]
    fn test_empty_design_tokens() {
        let out = design_tokens(&[], "Empty").unwrap();
        assert_eq!(out, "{\n  \"Empty\": {}\n}");
    }
}
