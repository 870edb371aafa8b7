//! Terminal table of a token set.

use console::Style;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::color::{Color, Rgb};
use crate::tokens::{TokenKey, TokenSet};

/// Widest value shown before truncation.
pub const VALUE_WIDTH: usize = 18;

const SWATCH: &str = "██";

/// Channel intensities of the xterm 6x6x6 color cube.
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// Nearest xterm 256-color index for `rgb`.
///
/// Both the color cube and the 24-step grey ramp are tried; the candidate
/// closer in RGB space wins, the cube on a tie. Alpha is not considered.
///
/// # Example
///
/// ```rust
/// use tintsmith::{preview, Rgb};
///
/// assert_eq!(preview::ansi256(Rgb::new(0xef, 0x44, 0x44)), 203);
/// assert_eq!(preview::ansi256(Rgb::WHITE), 231);
/// ```
pub fn ansi256(rgb: Rgb) -> u8 {
    let level = |c: u8| {
        (0..CUBE_LEVELS.len())
            .min_by_key(|&i| CUBE_LEVELS[i].abs_diff(c))
            .unwrap_or(0)
    };
    let (ri, gi, bi) = (level(rgb.r), level(rgb.g), level(rgb.b));
    let cube = Rgb::new(CUBE_LEVELS[ri], CUBE_LEVELS[gi], CUBE_LEVELS[bi]);
    let cube_index = 16 + 36 * ri + 6 * gi + bi;

    let mean = (u16::from(rgb.r) + u16::from(rgb.g) + u16::from(rgb.b)) / 3;
    let step = ((i32::from(mean) - 3) / 10).clamp(0, 23);
    let grey_level = (8 + 10 * step) as u8;
    let grey = Rgb::new(grey_level, grey_level, grey_level);

    if distance(rgb, cube) <= distance(rgb, grey) {
        cube_index as u8
    } else {
        232 + step as u8
    }
}

fn distance(a: Rgb, b: Rgb) -> u32 {
    let d = |x: u8, y: u8| u32::from(x.abs_diff(y)).pow(2);
    d(a.r, b.r) + d(a.g, b.g) + d(a.b, b.b)
}

/// Colored swatch for `color`, or blank columns of the same width.
fn swatch(color: Color, use_color: bool) -> String {
    if !use_color {
        return " ".repeat(SWATCH.width());
    }
    Style::new()
        .color256(ansi256(color.rgb()))
        .force_styling(true)
        .apply_to(SWATCH)
        .to_string()
}

/// `value` fitted to exactly [`VALUE_WIDTH`] columns.
///
/// Longer values keep their first `VALUE_WIDTH - 1` columns and end in `…`;
/// shorter ones are padded with spaces.
pub fn value_cell(value: &str) -> String {
    let mut cell = String::with_capacity(VALUE_WIDTH + 2);
    if value.width() <= VALUE_WIDTH {
        cell.push_str(value);
    } else {
        let mut used = 0;
        for c in value.chars() {
            used += c.width().unwrap_or(0);
            if used >= VALUE_WIDTH {
                break;
            }
            cell.push(c);
        }
        cell.push('…');
    }
    let pad = VALUE_WIDTH.saturating_sub(cell.width());
    cell.extend(std::iter::repeat(' ').take(pad));
    cell
}

/// Renders `tokens` grouped by category, one row per token.
///
/// Each row holds a swatch, the token key, its value (cut to
/// [`VALUE_WIDTH`] columns) and its description. With `use_color` off the
/// swatch is left blank and no escape codes are written.
///
/// # Example
///
/// ```rust
/// use tintsmith::{generate_tokens, preview, Mode};
///
/// let tokens = generate_tokens("#10B981", Mode::Light).unwrap();
/// let table = preview::render_token_table(&tokens, false);
/// assert!(table.starts_with("Interactive & Form\n"));
/// ```
pub fn render_token_table(tokens: &TokenSet, use_color: bool) -> String {
    let key_width = TokenKey::ALL
        .iter()
        .map(|k| k.as_str().len())
        .max()
        .unwrap_or(0);
    let heading = Style::new().bold().force_styling(use_color);

    let mut out = String::new();
    for (index, (category, entries)) in tokens.grouped().into_iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(&heading.apply_to(category.label()).to_string());
        out.push('\n');

        for (key, value) in entries {
            let swatch = swatch(value, use_color);
            let name = key.as_str();
            let cell = value_cell(&value.to_string());
            let description = key.description();
            out.push_str(&format!(
                "  {swatch} {name:<key_width$}  {cell}  {description}\n"
            ));
        }
    }
    out
}
