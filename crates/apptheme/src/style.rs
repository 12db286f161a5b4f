//! The user's appearance preference and its persistence identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scheme::ColorMode;

/// The three appearance modes a user can select.
///
/// Styles are persisted under stable string identifiers (`"Light"`,
/// `"Dark"`, `"Default"`), so stored preferences survive renames of the Rust
/// variants. Parsing is a strict three-way match: anything else reads as
/// [`ThemeStyle::SystemDefault`] at the store level.
///
/// # Example
///
/// ```rust
/// use apptheme::ThemeStyle;
///
/// assert_eq!(ThemeStyle::Dark.identifier(), "Dark");
/// assert_eq!(ThemeStyle::from_identifier("Default"), Some(ThemeStyle::SystemDefault));
/// assert_eq!(ThemeStyle::from_identifier("Solarized"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ThemeStyle {
    /// Forces light appearance regardless of the OS setting.
    #[serde(rename = "Light")]
    Light,
    /// Forces dark appearance regardless of the OS setting.
    #[serde(rename = "Dark")]
    Dark,
    /// Follows the OS color scheme (the default).
    #[default]
    #[serde(rename = "Default")]
    SystemDefault,
}

impl ThemeStyle {
    /// All selectable styles, in menu order.
    pub const ALL: [ThemeStyle; 3] = [
        ThemeStyle::SystemDefault,
        ThemeStyle::Light,
        ThemeStyle::Dark,
    ];

    /// The stable identifier written to the settings slot.
    pub fn identifier(&self) -> &'static str {
        match self {
            ThemeStyle::Light => "Light",
            ThemeStyle::Dark => "Dark",
            ThemeStyle::SystemDefault => "Default",
        }
    }

    /// Parses a stored identifier.
    ///
    /// Returns `None` for anything outside the three known identifiers;
    /// callers decide how to degrade (the store substitutes the default).
    pub fn from_identifier(value: &str) -> Option<ThemeStyle> {
        match value {
            "Light" => Some(ThemeStyle::Light),
            "Dark" => Some(ThemeStyle::Dark),
            "Default" => Some(ThemeStyle::SystemDefault),
            _ => None,
        }
    }

    /// The appearance override this style imposes on a render subtree.
    ///
    /// `None` means no override: descendants inherit the ambient OS scheme.
    pub fn color_mode(&self) -> Option<ColorMode> {
        match self {
            ThemeStyle::Light => Some(ColorMode::Light),
            ThemeStyle::Dark => Some(ColorMode::Dark),
            ThemeStyle::SystemDefault => None,
        }
    }
}

impl fmt::Display for ThemeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ThemeStyle::Light => "Light Mode",
            ThemeStyle::Dark => "Dark Mode",
            ThemeStyle::SystemDefault => "System Default",
        };
        f.write_str(label)
    }
}
