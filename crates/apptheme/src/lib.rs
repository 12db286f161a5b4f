//! # AppTheme - Persisted Appearance Preference
//!
//! AppTheme lets an application offer a user-selectable appearance mode —
//! Light, Dark, or System Default — persist that choice across restarts, and
//! apply it to an entire render subtree in one place. It provides:
//!
//! - A durable, observable store for the preference (one settings-file slot)
//! - OS color-scheme detection with a test override hook
//! - Scoped appearance overrides that an entire subtree inherits
//! - A wrapper that ties the three together on every render pass
//!
//! This crate is UI-toolkit agnostic: it doesn't render anything itself. Any
//! code that resolves its colors through [`effective_color_mode`] — directly
//! or via an adaptive theme — picks up the user's preference automatically.
//!
//! ## Core Concepts
//!
//! - [`ThemeStyle`]: the three-valued preference (`Light`, `Dark`,
//!   `SystemDefault`), persisted under stable string identifiers
//! - [`ThemeStore`]: shared handle to the persisted slot, with observer
//!   notification on every write
//! - [`ColorMode`]: the concrete light/dark scheme a subtree renders under
//! - [`AppTheme`]: wrapper that re-reads the store on each render and scopes
//!   the corresponding appearance override around its content builder
//!
//! ## Quick Start
//!
//! ```rust
//! use apptheme::{AppTheme, ColorMode, ThemeStore, ThemeStyle};
//!
//! let store = ThemeStore::in_memory();
//! let themed = AppTheme::new(store.clone(), || {
//!     // Anything evaluated here sees the user's preference.
//!     match apptheme::effective_color_mode() {
//!         ColorMode::Light => "light chrome",
//!         ColorMode::Dark => "dark chrome",
//!     }
//! });
//!
//! store.set(ThemeStyle::Dark);
//! assert_eq!(themed.render(), "dark chrome");
//! ```
//!
//! ## Persistence Layout
//!
//! The preference occupies a single key, [`THEME_STYLE_KEY`], in a flat JSON
//! string map (`settings.json` under the per-application config directory by
//! default). An absent key means System Default; an unrecognized value reads
//! as System Default rather than failing. The slot is never deleted.
//!
//! ## Failure Policy
//!
//! Nothing in the public API returns an error. Reads degrade to
//! [`ThemeStyle::SystemDefault`] and writes are fire-and-forget; corrupted or
//! pre-migration settings data can never take the UI down over a color.

pub mod scheme;
pub mod store;
pub mod style;
mod themed;

pub use scheme::{
    detect_color_mode, effective_color_mode, push_scheme, set_scheme_detector, ColorMode,
    SchemeScope,
};
pub use store::{
    MemoryBackend, PreferenceBackend, SettingsError, SettingsFile, ThemeStore, THEME_STYLE_KEY,
};
pub use style::ThemeStyle;
pub use themed::AppTheme;
