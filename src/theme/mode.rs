//! Light/dark mode selection.

use std::fmt;
use std::str::FromStr;
use std::sync::Mutex;

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The rendering context a token set is derived for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    /// Both modes, light first.
    pub const ALL: [Mode; 2] = [Mode::Light, Mode::Dark];

    /// Returns `true` for [`Mode::Dark`].
    pub fn is_dark(self) -> bool {
        matches!(self, Mode::Dark)
    }

    /// The lowercase identifier, `"light"` or `"dark"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }

    /// Capitalized label used in generated theme names.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Light => "Light",
            Mode::Dark => "Dark",
        }
    }

    /// Asks the current detector which mode the user prefers.
    ///
    /// Defaults to the operating system setting. Override with
    /// [`set_mode_detector`].
    pub fn detect() -> Mode {
        let detector = MODE_DETECTOR.lock().unwrap_or_else(|e| e.into_inner());
        (*detector)()
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a mode string is neither `light` nor `dark`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mode '{0}': expected 'light' or 'dark'")]
pub struct ModeParseError(pub String);

impl FromStr for Mode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("light") {
            Ok(Mode::Light)
        } else if s.eq_ignore_ascii_case("dark") {
            Ok(Mode::Dark)
        } else {
            Err(ModeParseError(s.to_string()))
        }
    }
}

type ModeDetector = fn() -> Mode;

static MODE_DETECTOR: Lazy<Mutex<ModeDetector>> = Lazy::new(|| Mutex::new(os_mode_detector));

/// Overrides the detector used by [`Mode::detect`].
///
/// This is useful for testing or when the host application already knows
/// which mode it renders in.
pub fn set_mode_detector(detector: ModeDetector) {
    let mut guard = MODE_DETECTOR.lock().unwrap_or_else(|e| e.into_inner());
    *guard = detector;
}

fn os_mode_detector() -> Mode {
    match detect_os_theme() {
        OsThemeMode::Dark => Mode::Dark,
        OsThemeMode::Light => Mode::Light,
    }
}
