//! Token derivation from a single base color.
//!
//! The base color is decomposed into HSL once. A [`Palette`] then holds the
//! intermediate primitives (background scale, accent family, track, error
//! glow) and every token is a fixed formula over those primitives.

use tracing::debug;

use super::key::TokenKey;
use super::set::TokenSet;
use crate::color::{hex_to_hsl, Color, ColorError, Hsl, Rgb};
use crate::theme::Mode;

/// Fixed error red, `#EF4444`.
pub const ERROR_RED: Rgb = Rgb::new(0xef, 0x44, 0x44);

/// Derives the complete token set for `base` in `mode`.
///
/// Identical inputs always yield identical sets, so callers may memoize on
/// `(base, mode)`.
///
/// # Example
///
/// ```rust
/// use tintsmith::{generate_tokens, Mode, TokenKey};
///
/// let tokens = generate_tokens("#6366F1", Mode::Dark).unwrap();
/// assert_eq!(tokens[TokenKey::CheckboxFill].to_string(), "#6467f2");
/// assert_eq!(tokens[TokenKey::StickyHeaderShadow].to_string(), "rgba(0,0,0,0.5)");
/// ```
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] if `base` is not a six-digit
/// hex color.
pub fn generate_tokens(base: &str, mode: Mode) -> Result<TokenSet, ColorError> {
    let hsl = hex_to_hsl(base)?;
    debug!(base, %mode, h = hsl.h, s = hsl.s, l = hsl.l, "deriving token set");
    Ok(TokenSet::derive(hsl, mode))
}

impl TokenSet {
    /// Derives the complete token set from an already decomposed base color.
    pub fn derive(base: Hsl, mode: Mode) -> TokenSet {
        let palette = Palette::new(base, mode);
        TokenSet::from_fn(|key| palette.token(key))
    }
}

/// The four background surfaces of a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundScale {
    pub base: Rgb,
    pub surface: Rgb,
    pub elevated: Rgb,
    pub border: Rgb,
}

/// Intermediate colors every token is assembled from.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub mode: Mode,
    /// Decomposed base color.
    pub hsl: Hsl,
    pub background: BackgroundScale,
    pub accent: Rgb,
    pub accent_light: Rgb,
    pub accent_lighter: Rgb,
    /// Neutral track behind sliders and progress bars.
    pub track: Rgb,
    pub error_glow: Color,
}

fn lighten(hsl: Hsl, amount: f64) -> Rgb {
    Hsl::new(hsl.h, hsl.s, (hsl.l + amount).min(95.0)).to_rgb()
}

impl Palette {
    pub fn new(hsl: Hsl, mode: Mode) -> Self {
        let Hsl { h, s, .. } = hsl;
        let tone = |sat_drop: f64, sat_floor: f64, l: f64| {
            Hsl::new(h, (s - sat_drop).max(sat_floor), l).to_rgb()
        };

        let background = match mode {
            Mode::Dark => BackgroundScale {
                base: tone(70.0, 5.0, 5.0),
                surface: tone(60.0, 5.0, 10.0),
                elevated: tone(50.0, 5.0, 15.0),
                border: tone(40.0, 5.0, 18.0),
            },
            Mode::Light => BackgroundScale {
                base: Rgb::WHITE,
                surface: tone(70.0, 3.0, 97.0),
                elevated: tone(60.0, 3.0, 95.0),
                border: tone(50.0, 5.0, 88.0),
            },
        };

        Self {
            mode,
            hsl,
            background,
            accent: hsl.to_rgb(),
            accent_light: lighten(hsl, 12.0),
            accent_lighter: lighten(hsl, 25.0),
            track: match mode {
                Mode::Dark => background.elevated,
                Mode::Light => background.border,
            },
            error_glow: ERROR_RED.with_alpha(if mode.is_dark() { 0.5 } else { 0.3 }),
        }
    }

    /// The base color re-encoded at its own HSL.
    pub fn mid(&self) -> Rgb {
        self.hsl.to_rgb()
    }

    /// Raises lightness by `amount`, capped at 95.
    pub fn lighter(&self, amount: f64) -> Rgb {
        lighten(self.hsl, amount)
    }

    /// Lowers lightness by `amount`, floored at 5.
    pub fn darker(&self, amount: f64) -> Rgb {
        Hsl::new(self.hsl.h, self.hsl.s, (self.hsl.l - amount).max(5.0)).to_rgb()
    }

    /// Lowers saturation by `amount`, floored at 0.
    pub fn desaturated(&self, amount: f64) -> Rgb {
        Hsl::new(self.hsl.h, (self.hsl.s - amount).max(0.0), self.hsl.l).to_rgb()
    }

    /// The value of `key` under this palette.
    pub fn token(&self, key: TokenKey) -> Color {
        let dark = self.mode.is_dark();
        let bg = &self.background;
        let pick = |on_dark: Rgb, on_light: Rgb| Color::Solid(if dark { on_dark } else { on_light });
        let shadow = |on_dark: f64, on_light: f64| {
            Rgb::BLACK.with_alpha(if dark { on_dark } else { on_light })
        };

        match key {
            TokenKey::CheckboxFill
            | TokenKey::SliderThumb
            | TokenKey::SwitchTrack
            | TokenKey::FocusedInputBorder
            | TokenKey::GradientStop1
            | TokenKey::CaretColor
            | TokenKey::ProgressBarFill => self.accent.into(),
            TokenKey::RadioIndicator => self.accent_light.into(),
            TokenKey::SliderTrack | TokenKey::ProgressBarTrack => self.track.into(),
            TokenKey::SwitchHandle => pick(bg.elevated, Rgb::WHITE),
            TokenKey::FileUploadButton | TokenKey::TableHeaderBg => bg.surface.into(),
            TokenKey::AutocompleteHighlight => pick(self.darker(10.0), self.lighter(35.0)),
            TokenKey::InvalidFieldGlow => self.error_glow,
            TokenKey::BackdropTint => {
                if dark {
                    bg.base.with_alpha(0.8)
                } else {
                    Rgb::WHITE.with_alpha(0.85)
                }
            }
            TokenKey::ColumnDivider
            | TokenKey::TableCellBorder
            | TokenKey::SidebarBorder
            | TokenKey::SkeletonBase => bg.border.into(),
            TokenKey::TableRowStripe => pick(bg.base, bg.surface),
            TokenKey::StickyHeaderShadow => shadow(0.5, 0.08),
            TokenKey::CardFooterBg | TokenKey::ScrollbarCorner => bg.base.into(),
            TokenKey::GradientStop2 => {
                Hsl::new(self.hsl.h + 30.0, self.hsl.s, self.hsl.l).to_rgb().into()
            }
            TokenKey::SkeletonHighlight => bg.elevated.into(),
            TokenKey::ButtonRipple => self.accent.with_alpha(if dark { 0.3 } else { 0.15 }),
            TokenKey::InsetBoxShadow => shadow(0.5, 0.1),
            TokenKey::DropShadow => shadow(0.4, 0.08),
            TokenKey::GlowEffect => self.accent.with_alpha(0.5),
            TokenKey::MobileAddressBar => pick(bg.base, Rgb::WHITE),
            TokenKey::TapHighlight => self.accent.with_alpha(0.15),
        }
    }
}
