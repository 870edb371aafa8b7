//! Export format registry and dispatch.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use super::error::ExportError;
use super::{collect_entries, json, text};
use crate::tokens::TokenKey;

/// One of the six textual serializations of a token set.
///
/// The default is [`ExportFormat::Css`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// `:root { --var: value; }`
    #[default]
    Css,
    /// `theme.extend.colors` config module
    Tailwind,
    /// Structured theme file with metadata per token
    Json,
    /// `$var: value;` grouped by category
    Scss,
    /// Token-exchange JSON grouped by category
    DesignTokens,
    /// `export const theme = {}`
    StyleObject,
}

/// Registry entry describing an export format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExportFormatDescriptor {
    #[serde(skip)]
    pub format: ExportFormat,
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    /// Short language tag for the produced text.
    pub language: &'static str,
}

/// All formats in display order.
pub const EXPORT_FORMATS: [ExportFormatDescriptor; 6] = [
    ExportFormat::Css.descriptor(),
    ExportFormat::Tailwind.descriptor(),
    ExportFormat::Json.descriptor(),
    ExportFormat::Scss.descriptor(),
    ExportFormat::DesignTokens.descriptor(),
    ExportFormat::StyleObject.descriptor(),
];

impl ExportFormat {
    pub const ALL: [ExportFormat; 6] = [
        ExportFormat::Css,
        ExportFormat::Tailwind,
        ExportFormat::Json,
        ExportFormat::Scss,
        ExportFormat::DesignTokens,
        ExportFormat::StyleObject,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            ExportFormat::Css => "css",
            ExportFormat::Tailwind => "tailwind",
            ExportFormat::Json => "json",
            ExportFormat::Scss => "scss",
            ExportFormat::DesignTokens => "design-tokens",
            ExportFormat::StyleObject => "style-object",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ExportFormat::Css => "CSS Variables",
            ExportFormat::Tailwind => "Tailwind Config",
            ExportFormat::Json => "JSON Theme",
            ExportFormat::Scss => "SCSS Variables",
            ExportFormat::DesignTokens => "Design Tokens",
            ExportFormat::StyleObject => "JS Style Object",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            ExportFormat::Css => ":root { --var: value; }",
            ExportFormat::Tailwind => "theme.extend.colors",
            ExportFormat::Json => "Structured token file",
            ExportFormat::Scss => "$var: value;",
            ExportFormat::DesignTokens => "W3C draft format",
            ExportFormat::StyleObject => "export const theme = {}",
        }
    }

    pub const fn language(self) -> &'static str {
        match self {
            ExportFormat::Css => "CSS",
            ExportFormat::Tailwind | ExportFormat::StyleObject => "JS",
            ExportFormat::Json | ExportFormat::DesignTokens => "JSON",
            ExportFormat::Scss => "SCSS",
        }
    }

    pub const fn descriptor(self) -> ExportFormatDescriptor {
        ExportFormatDescriptor {
            format: self,
            id: self.id(),
            label: self.label(),
            description: self.description(),
            language: self.language(),
        }
    }

    /// Serializes `tokens` under the display name `name`.
    ///
    /// `tokens` may be a full [`TokenSet`](crate::TokenSet) iterator or any
    /// subset of pairs; order is preserved. A key given more than once is
    /// written once, at its first position with its last value. `name` is embedded verbatim in
    /// comments and string literals of the text formats. Only the JSON
    /// formats escape it.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Template`] or [`ExportError::Json`] if the
    /// underlying renderer fails.
    pub fn serialize<I, V>(self, tokens: I, name: &str) -> Result<String, ExportError>
    where
        I: IntoIterator<Item = (TokenKey, V)>,
        V: fmt::Display,
    {
        let entries = collect_entries(tokens);
        debug!(format = self.id(), tokens = entries.len(), name, "serializing tokens");

        let out = match self {
            ExportFormat::Css => text::css(&entries, name)?,
            ExportFormat::Tailwind => text::tailwind(&entries, name)?,
            ExportFormat::Json => json::theme_json(&entries, name)?,
            ExportFormat::Scss => text::scss(&entries, name)?,
            ExportFormat::DesignTokens => json::design_tokens(&entries, name)?,
            ExportFormat::StyleObject => text::style_object(&entries, name)?,
        };
        Ok(out)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExportFormat::ALL
            .into_iter()
            .find(|format| format.id() == s)
            .ok_or_else(|| ExportError::UnknownFormat { id: s.to_string() })
    }
}
