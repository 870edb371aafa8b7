//! Token identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Identifier of one derived UI color token.
///
/// Variants are declared in canonical order: grouped by category, the order
/// every full token set iterates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKey {
    CheckboxFill,
    RadioIndicator,
    SliderThumb,
    SliderTrack,
    SwitchHandle,
    SwitchTrack,
    FileUploadButton,
    AutocompleteHighlight,
    InvalidFieldGlow,
    FocusedInputBorder,
    BackdropTint,
    ColumnDivider,
    TableRowStripe,
    TableHeaderBg,
    TableCellBorder,
    StickyHeaderShadow,
    SidebarBorder,
    CardFooterBg,
    GradientStop1,
    GradientStop2,
    SkeletonBase,
    SkeletonHighlight,
    ButtonRipple,
    InsetBoxShadow,
    DropShadow,
    GlowEffect,
    MobileAddressBar,
    TapHighlight,
    ScrollbarCorner,
    CaretColor,
    ProgressBarFill,
    ProgressBarTrack,
}

impl TokenKey {
    /// Number of token keys.
    pub const COUNT: usize = 32;

    /// Every key in canonical order.
    pub const ALL: [TokenKey; TokenKey::COUNT] = [
        TokenKey::CheckboxFill,
        TokenKey::RadioIndicator,
        TokenKey::SliderThumb,
        TokenKey::SliderTrack,
        TokenKey::SwitchHandle,
        TokenKey::SwitchTrack,
        TokenKey::FileUploadButton,
        TokenKey::AutocompleteHighlight,
        TokenKey::InvalidFieldGlow,
        TokenKey::FocusedInputBorder,
        TokenKey::BackdropTint,
        TokenKey::ColumnDivider,
        TokenKey::TableRowStripe,
        TokenKey::TableHeaderBg,
        TokenKey::TableCellBorder,
        TokenKey::StickyHeaderShadow,
        TokenKey::SidebarBorder,
        TokenKey::CardFooterBg,
        TokenKey::GradientStop1,
        TokenKey::GradientStop2,
        TokenKey::SkeletonBase,
        TokenKey::SkeletonHighlight,
        TokenKey::ButtonRipple,
        TokenKey::InsetBoxShadow,
        TokenKey::DropShadow,
        TokenKey::GlowEffect,
        TokenKey::MobileAddressBar,
        TokenKey::TapHighlight,
        TokenKey::ScrollbarCorner,
        TokenKey::CaretColor,
        TokenKey::ProgressBarFill,
        TokenKey::ProgressBarTrack,
    ];

    /// The camelCase identifier used as the key in exported formats.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKey::CheckboxFill => "checkboxFill",
            TokenKey::RadioIndicator => "radioIndicator",
            TokenKey::SliderThumb => "sliderThumb",
            TokenKey::SliderTrack => "sliderTrack",
            TokenKey::SwitchHandle => "switchHandle",
            TokenKey::SwitchTrack => "switchTrack",
            TokenKey::FileUploadButton => "fileUploadButton",
            TokenKey::AutocompleteHighlight => "autocompleteHighlight",
            TokenKey::InvalidFieldGlow => "invalidFieldGlow",
            TokenKey::FocusedInputBorder => "focusedInputBorder",
            TokenKey::BackdropTint => "backdropTint",
            TokenKey::ColumnDivider => "columnDivider",
            TokenKey::TableRowStripe => "tableRowStripe",
            TokenKey::TableHeaderBg => "tableHeaderBg",
            TokenKey::TableCellBorder => "tableCellBorder",
            TokenKey::StickyHeaderShadow => "stickyHeaderShadow",
            TokenKey::SidebarBorder => "sidebarBorder",
            TokenKey::CardFooterBg => "cardFooterBg",
            TokenKey::GradientStop1 => "gradientStop1",
            TokenKey::GradientStop2 => "gradientStop2",
            TokenKey::SkeletonBase => "skeletonBase",
            TokenKey::SkeletonHighlight => "skeletonHighlight",
            TokenKey::ButtonRipple => "buttonRipple",
            TokenKey::InsetBoxShadow => "insetBoxShadow",
            TokenKey::DropShadow => "dropShadow",
            TokenKey::GlowEffect => "glowEffect",
            TokenKey::MobileAddressBar => "mobileAddressBar",
            TokenKey::TapHighlight => "tapHighlight",
            TokenKey::ScrollbarCorner => "scrollbarCorner",
            TokenKey::CaretColor => "caretColor",
            TokenKey::ProgressBarFill => "progressBarFill",
            TokenKey::ProgressBarTrack => "progressBarTrack",
        }
    }

    /// Position of the key in [`TokenKey::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TokenKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a string that names no token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown token key '{0}'")]
pub struct UnknownTokenKey(pub String);

impl FromStr for TokenKey {
    type Err = UnknownTokenKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownTokenKey(s.to_string()))
    }
}

impl Serialize for TokenKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_is_in_declaration_order() {
        for (i, key) in TokenKey::ALL.iter().enumerate() {
            assert_eq!(key.index(), i, "{key} out of order");
        }
    }

    #[test]
    fn test_identifiers_are_unique() {
        let names: HashSet<&str> = TokenKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(names.len(), TokenKey::COUNT);
    }

    #[test]
    fn test_from_str_round_trips() {
        for key in TokenKey::ALL {
            assert_eq!(key.as_str().parse::<TokenKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_from_str_is_case_sensitive() {
        assert_eq!(
            "CheckboxFill".parse::<TokenKey>(),
            Err(UnknownTokenKey("CheckboxFill".into()))
        );
    }

    #[test]
    fn test_display_uses_identifier() {
        assert_eq!(TokenKey::GradientStop2.to_string(), "gradientStop2");
    }
}
