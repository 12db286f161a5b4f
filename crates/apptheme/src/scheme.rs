//! Ambient color scheme: OS detection and scoped overrides.
//!
//! This module answers one question for rendering code: "which scheme am I
//! drawing under right now?" The answer, [`effective_color_mode`], combines
//! two layers:
//!
//! 1. **Detection**: [`detect_color_mode`] queries the OS for the user's
//!    preferred scheme via the `dark-light` crate. Override it for testing
//!    with [`set_scheme_detector`].
//! 2. **Scoped overrides**: [`push_scheme`] installs an override for the
//!    lifetime of the returned [`SchemeScope`] guard. While a scope is alive,
//!    every call to [`effective_color_mode`] — no matter how deep in the call
//!    tree — sees the pushed mode instead of the detector's answer. Nested
//!    scopes rebind locally and restore the outer mode on drop.
//!
//! The override stack is what lets a single wrapper apply an appearance to a
//! whole subtree: the wrapper pushes once, and every descendant that resolves
//! its colors through [`effective_color_mode`] inherits the mode, unless it
//! pushes its own.
//!
//! ```rust
//! use apptheme::{effective_color_mode, push_scheme, set_scheme_detector, ColorMode};
//!
//! set_scheme_detector(|| ColorMode::Light);
//! assert_eq!(effective_color_mode(), ColorMode::Light);
//!
//! let _dark = push_scheme(ColorMode::Dark);
//! assert_eq!(effective_color_mode(), ColorMode::Dark);
//! ```

use dark_light::{detect as detect_os_scheme, Mode as OsSchemeMode};
use once_cell::sync::Lazy;
use std::sync::Mutex;

/// The concrete scheme a subtree renders under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Light mode (light background, dark text).
    Light,
    /// Dark mode (dark background, light text).
    Dark,
}

type SchemeDetector = fn() -> ColorMode;

static SCHEME_DETECTOR: Lazy<Mutex<SchemeDetector>> = Lazy::new(|| Mutex::new(os_scheme_detector));

static SCHEME_OVERRIDES: Lazy<Mutex<Vec<ColorMode>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Overrides the detector used to determine the user's OS color scheme.
///
/// This is useful for testing or when you want to force a specific mode
/// process-wide. Tests that call this should restore their changes.
pub fn set_scheme_detector(detector: SchemeDetector) {
    let mut guard = SCHEME_DETECTOR.lock().unwrap();
    *guard = detector;
}

/// Detects the user's preferred color scheme from the OS.
///
/// Ignores any scoped overrides; most rendering code wants
/// [`effective_color_mode`] instead.
pub fn detect_color_mode() -> ColorMode {
    let detector = SCHEME_DETECTOR.lock().unwrap();
    (*detector)()
}

/// The color mode currently in effect: the innermost pushed override if one
/// is in scope, otherwise the OS detector's answer.
pub fn effective_color_mode() -> ColorMode {
    if let Some(mode) = SCHEME_OVERRIDES.lock().unwrap().last().copied() {
        return mode;
    }
    detect_color_mode()
}

/// Guard for a scoped appearance override.
///
/// Returned by [`push_scheme`]; the override is lifted when the guard drops.
#[must_use = "the override is lifted as soon as this guard is dropped"]
#[derive(Debug)]
pub struct SchemeScope {
    _private: (),
}

/// Installs `mode` as the effective color mode until the returned guard is
/// dropped. Scopes nest: the innermost one wins, and dropping it restores
/// whatever was in effect before.
pub fn push_scheme(mode: ColorMode) -> SchemeScope {
    SCHEME_OVERRIDES.lock().unwrap().push(mode);
    SchemeScope { _private: () }
}

impl Drop for SchemeScope {
    fn drop(&mut self) {
        SCHEME_OVERRIDES.lock().unwrap().pop();
    }
}

fn os_scheme_detector() -> ColorMode {
    // Unspecified and detection failures both resolve to light, matching the
    // convention of terminals that default to light-on-dark-unaware output.
    match detect_os_scheme() {
        Ok(OsSchemeMode::Dark) => ColorMode::Dark,
        Ok(OsSchemeMode::Light) | Ok(OsSchemeMode::Unspecified) | Err(_) => ColorMode::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_detect_color_mode_uses_override() {
        set_scheme_detector(|| ColorMode::Dark);
        assert_eq!(detect_color_mode(), ColorMode::Dark);

        set_scheme_detector(|| ColorMode::Light);
        assert_eq!(detect_color_mode(), ColorMode::Light);
    }

    #[test]
    #[serial]
    fn test_effective_mode_falls_back_to_detector() {
        set_scheme_detector(|| ColorMode::Dark);
        assert_eq!(effective_color_mode(), ColorMode::Dark);

        set_scheme_detector(|| ColorMode::Light);
        assert_eq!(effective_color_mode(), ColorMode::Light);
    }

    #[test]
    #[serial]
    fn test_pushed_scheme_wins_over_detector() {
        set_scheme_detector(|| ColorMode::Light);

        let scope = push_scheme(ColorMode::Dark);
        assert_eq!(effective_color_mode(), ColorMode::Dark);

        drop(scope);
        assert_eq!(effective_color_mode(), ColorMode::Light);
    }

    #[test]
    #[serial]
    fn test_nested_scopes_rebind_and_restore() {
        set_scheme_detector(|| ColorMode::Light);

        let outer = push_scheme(ColorMode::Dark);
        {
            let _inner = push_scheme(ColorMode::Light);
            assert_eq!(effective_color_mode(), ColorMode::Light);
        }
        assert_eq!(effective_color_mode(), ColorMode::Dark);

        drop(outer);
        assert_eq!(effective_color_mode(), ColorMode::Light);
    }
}
