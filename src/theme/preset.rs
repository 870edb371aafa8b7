//! Named quick-pick base colors.

use serde::Serialize;
use tracing::debug;

use super::mode::Mode;

/// A named base color offered as a starting point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Preset {
    pub name: &'static str,
    pub color: &'static str,
}

/// The quick-pick palette, in display order.
pub const PRESETS: &[Preset] = &[
    Preset { name: "Indigo", color: "#6366F1" },
    Preset { name: "Violet", color: "#8B5CF6" },
    Preset { name: "Pink", color: "#EC4899" },
    Preset { name: "Rose", color: "#F43F5E" },
    Preset { name: "Red", color: "#EF4444" },
    Preset { name: "Amber", color: "#F59E0B" },
    Preset { name: "Emerald", color: "#10B981" },
    Preset { name: "Sky", color: "#0EA5E9" },
    Preset { name: "Blue", color: "#3B82F6" },
    Preset { name: "Teal", color: "#14B8A6" },
    Preset { name: "Lime", color: "#84CC16" },
    Preset { name: "Orange", color: "#F97316" },
];

impl Preset {
    /// Finds the preset whose color matches `color`, ignoring case.
    pub fn find_by_color(color: &str) -> Option<&'static Preset> {
        PRESETS.iter().find(|p| p.color.eq_ignore_ascii_case(color))
    }

    /// Finds the preset named `name`, ignoring case.
    pub fn find_by_name(name: &str) -> Option<&'static Preset> {
        PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Resolves user input that is either a preset name or a color.
    ///
    /// A preset name (any case) becomes that preset's color; anything else
    /// is returned unchanged for the color parser to judge.
    ///
    /// ```rust
    /// use tintsmith::Preset;
    ///
    /// assert_eq!(Preset::resolve("emerald"), "#10B981");
    /// assert_eq!(Preset::resolve("#123456"), "#123456");
    /// ```
    pub fn resolve(input: &str) -> &str {
        match Preset::find_by_name(input) {
            Some(preset) => {
                debug!(preset = preset.name, color = preset.color, "using preset");
                preset.color
            }
            None => input,
        }
    }
}

/// Display name for a token set generated from `base` in `mode`.
///
/// # Example
///
/// ```rust
/// use tintsmith::{theme_name, Mode};
///
/// assert_eq!(theme_name("#6366f1", Mode::Dark), "Custom Indigo Dark");
/// assert_eq!(theme_name("#123456", Mode::Light), "Custom Color Light");
/// ```
pub fn theme_name(base: &str, mode: Mode) -> String {
    let label = Preset::find_by_color(base).map_or("Color", |p| p.name);
    format!("Custom {} {}", label, mode.label())
}
