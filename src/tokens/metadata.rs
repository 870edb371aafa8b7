//! Static token metadata registry.
//!
//! One [`TokenMeta`] per [`TokenKey`], stored in canonical key order so a
//! lookup is an index. The table is read-only and shared process-wide.

use std::fmt;

use serde::{Serialize, Serializer};

use super::key::TokenKey;

/// Presentation group a token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    InteractiveForm,
    LayoutStructural,
    AnimationVisualFx,
    SystemBrowser,
}

impl Category {
    /// Categories in canonical display order.
    pub const ALL: [Category; 4] = [
        Category::InteractiveForm,
        Category::LayoutStructural,
        Category::AnimationVisualFx,
        Category::SystemBrowser,
    ];

    /// Display label, also used as the group name in exports.
    pub fn label(self) -> &'static str {
        match self {
            Category::InteractiveForm => "Interactive & Form",
            Category::LayoutStructural => "Layout & Structural",
            Category::AnimationVisualFx => "Animation & Visual FX",
            Category::SystemBrowser => "System & Browser",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Presentation and naming data for one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenMeta {
    pub key: TokenKey,
    pub label: &'static str,
    pub category: Category,
    /// Canonical custom-property name, including the leading `--`.
    pub css_var: &'static str,
    pub description: &'static str,
}

/// Metadata for every token, indexed by [`TokenKey::index`].
pub static TOKEN_METADATA: [TokenMeta; TokenKey::COUNT] = [
    TokenMeta {
        key: TokenKey::CheckboxFill,
        label: "Checkbox Fill",
        category: Category::InteractiveForm,
        css_var: "--checkbox-fill",
        description: "Background color of checked checkboxes",
    },
    TokenMeta {
        key: TokenKey::RadioIndicator,
        label: "Radio Indicator",
        category: Category::InteractiveForm,
        css_var: "--radio-indicator",
        description: "Filled dot color for selected radio buttons",
    },
    TokenMeta {
        key: TokenKey::SliderThumb,
        label: "Slider Thumb",
        category: Category::InteractiveForm,
        css_var: "--slider-thumb",
        description: "Handle color of range input sliders",
    },
    TokenMeta {
        key: TokenKey::SliderTrack,
        label: "Slider Track",
        category: Category::InteractiveForm,
        css_var: "--slider-track",
        description: "Background track of range inputs",
    },
    TokenMeta {
        key: TokenKey::SwitchHandle,
        label: "Switch Handle",
        category: Category::InteractiveForm,
        css_var: "--switch-handle",
        description: "Sliding knob of toggle switches",
    },
    TokenMeta {
        key: TokenKey::SwitchTrack,
        label: "Switch Track",
        category: Category::InteractiveForm,
        css_var: "--switch-track",
        description: "Track background when switch is on",
    },
    TokenMeta {
        key: TokenKey::FileUploadButton,
        label: "File Upload Button",
        category: Category::InteractiveForm,
        css_var: "--file-upload-button",
        description: "Background of file input trigger button",
    },
    TokenMeta {
        key: TokenKey::AutocompleteHighlight,
        label: "Autocomplete Highlight",
        category: Category::InteractiveForm,
        css_var: "--autocomplete-highlight",
        description: "Background of hovered autocomplete items",
    },
    TokenMeta {
        key: TokenKey::InvalidFieldGlow,
        label: "Invalid Field Glow",
        category: Category::InteractiveForm,
        css_var: "--invalid-field-glow",
        description: "Box-shadow glow on validation-failed fields",
    },
    TokenMeta {
        key: TokenKey::FocusedInputBorder,
        label: "Focused Input Border",
        category: Category::InteractiveForm,
        css_var: "--focused-input-border",
        description: "Border color of focused form inputs",
    },
    TokenMeta {
        key: TokenKey::BackdropTint,
        label: "Backdrop Tint",
        category: Category::LayoutStructural,
        css_var: "--backdrop-tint",
        description: "Backdrop-filter overlay for modals/drawers",
    },
    TokenMeta {
        key: TokenKey::ColumnDivider,
        label: "Column Divider",
        category: Category::LayoutStructural,
        css_var: "--column-divider",
        description: "Border color between columns or sections",
    },
    TokenMeta {
        key: TokenKey::TableRowStripe,
        label: "Table Row Stripe",
        category: Category::LayoutStructural,
        css_var: "--table-row-stripe",
        description: "Alternating row background (zebra striping)",
    },
    TokenMeta {
        key: TokenKey::TableHeaderBg,
        label: "Table Header Background",
        category: Category::LayoutStructural,
        css_var: "--table-header-bg",
        description: "Background of table header cells",
    },
    TokenMeta {
        key: TokenKey::TableCellBorder,
        label: "Table Cell Border",
        category: Category::LayoutStructural,
        css_var: "--table-cell-border",
        description: "Border color between table cells",
    },
    TokenMeta {
        key: TokenKey::StickyHeaderShadow,
        label: "Sticky Header Shadow",
        category: Category::LayoutStructural,
        css_var: "--sticky-header-shadow",
        description: "Box-shadow cast by sticky headers when scrolled",
    },
    TokenMeta {
        key: TokenKey::SidebarBorder,
        label: "Sidebar Border",
        category: Category::LayoutStructural,
        css_var: "--sidebar-border",
        description: "Border separating sidebar from main content",
    },
    TokenMeta {
        key: TokenKey::CardFooterBg,
        label: "Card Footer Background",
        category: Category::LayoutStructural,
        css_var: "--card-footer-bg",
        description: "Background of card footer sections",
    },
    TokenMeta {
        key: TokenKey::GradientStop1,
        label: "Gradient Stop 1",
        category: Category::AnimationVisualFx,
        css_var: "--gradient-stop-1",
        description: "First color stop for UI gradients",
    },
    TokenMeta {
        key: TokenKey::GradientStop2,
        label: "Gradient Stop 2",
        category: Category::AnimationVisualFx,
        css_var: "--gradient-stop-2",
        description: "Second color stop for UI gradients",
    },
    TokenMeta {
        key: TokenKey::SkeletonBase,
        label: "Skeleton Base",
        category: Category::AnimationVisualFx,
        css_var: "--skeleton-base",
        description: "Base color of loading skeleton elements",
    },
    TokenMeta {
        key: TokenKey::SkeletonHighlight,
        label: "Skeleton Highlight",
        category: Category::AnimationVisualFx,
        css_var: "--skeleton-highlight",
        description: "Shimmer highlight for skeleton loaders",
    },
    TokenMeta {
        key: TokenKey::ButtonRipple,
        label: "Button Ripple",
        category: Category::AnimationVisualFx,
        css_var: "--button-ripple",
        description: "Color of click ripple effects on buttons",
    },
    TokenMeta {
        key: TokenKey::InsetBoxShadow,
        label: "Inset Box Shadow",
        category: Category::AnimationVisualFx,
        css_var: "--inset-box-shadow",
        description: "Inset shadow for pressed/sunken elements",
    },
    TokenMeta {
        key: TokenKey::DropShadow,
        label: "Drop Shadow Filter",
        category: Category::AnimationVisualFx,
        css_var: "--drop-shadow",
        description: "CSS filter drop-shadow color",
    },
    TokenMeta {
        key: TokenKey::GlowEffect,
        label: "Glow Effect",
        category: Category::AnimationVisualFx,
        css_var: "--glow-effect",
        description: "Neon glow box-shadow for highlighted elements",
    },
    TokenMeta {
        key: TokenKey::MobileAddressBar,
        label: "Mobile Address Bar",
        category: Category::SystemBrowser,
        css_var: "--mobile-address-bar",
        description: "Browser chrome color (theme-color meta tag)",
    },
    TokenMeta {
        key: TokenKey::TapHighlight,
        label: "Tap Highlight",
        category: Category::SystemBrowser,
        css_var: "--tap-highlight",
        description: "-webkit-tap-highlight-color for mobile taps",
    },
    TokenMeta {
        key: TokenKey::ScrollbarCorner,
        label: "Scrollbar Corner",
        category: Category::SystemBrowser,
        css_var: "--scrollbar-corner",
        description: "Corner piece where scrollbars meet",
    },
    TokenMeta {
        key: TokenKey::CaretColor,
        label: "Caret Color",
        category: Category::SystemBrowser,
        css_var: "--caret-color",
        description: "Text cursor color in input fields",
    },
    TokenMeta {
        key: TokenKey::ProgressBarFill,
        label: "Progress Bar Fill",
        category: Category::SystemBrowser,
        css_var: "--progress-bar-fill",
        description: "Filled portion of progress/meter elements",
    },
    TokenMeta {
        key: TokenKey::ProgressBarTrack,
        label: "Progress Bar Track",
        category: Category::SystemBrowser,
        css_var: "--progress-bar-track",
        description: "Empty track of progress elements",
    },
];

impl TokenKey {
    /// Metadata entry for this key.
    pub fn metadata(self) -> &'static TokenMeta {
        &TOKEN_METADATA[self.index()]
    }

    pub fn category(self) -> Category {
        self.metadata().category
    }

    pub fn label(self) -> &'static str {
        self.metadata().label
    }

    pub fn description(self) -> &'static str {
        self.metadata().description
    }

    pub fn css_var(self) -> &'static str {
        self.metadata().css_var
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_matches_keys_one_to_one() {
        assert_eq!(TOKEN_METADATA.len(), TokenKey::ALL.len());
        for (meta, key) in TOKEN_METADATA.iter().zip(TokenKey::ALL) {
            assert_eq!(meta.key, key);
            assert!(std::ptr::eq(key.metadata(), meta));
        }
    }

    #[test]
    fn test_css_vars_are_unique_and_prefixed() {
        let vars: HashSet<&str> = TOKEN_METADATA.iter().map(|m| m.css_var).collect();
        assert_eq!(vars.len(), TOKEN_METADATA.len());
        assert!(vars.iter().all(|v| v.starts_with("--")));
    }

    #[test]
    fn test_every_category_is_populated() {
        for category in Category::ALL {
            let count = TOKEN_METADATA.iter().filter(|m| m.category == category).count();
            assert!(count > 0, "{category} has no tokens");
        }
    }

    #[test]
    fn test_categories_are_contiguous_in_key_order() {
        let mut seen: Vec<Category> = Vec::new();
        for key in TokenKey::ALL {
            if seen.last() != Some(&key.category()) {
                assert!(!seen.contains(&key.category()));
                seen.push(key.category());
            }
        }
        assert_eq!(seen, Category::ALL);
    }

    #[test]
    fn test_lookup() {
        let meta = TokenKey::GradientStop1.metadata();
        assert_eq!(meta.label, "Gradient Stop 1");
        assert_eq!(meta.css_var, "--gradient-stop-1");
        assert_eq!(meta.category, Category::AnimationVisualFx);
        assert_eq!(TokenKey::DropShadow.label(), "Drop Shadow Filter");
        assert_eq!(TokenKey::MobileAddressBar.category().label(), "System & Browser");
    }
}
