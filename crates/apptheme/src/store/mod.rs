//! Durable storage for the theme preference.
//!
//! This module provides:
//!
//! - [`PreferenceBackend`]: minimal key-value abstraction over the platform
//!   settings store, so the persistence layer can be swapped or mocked
//! - [`SettingsFile`]: the durable backend, a flat JSON string map in the
//!   per-application config directory
//! - [`MemoryBackend`]: in-process backend for tests and previews
//! - [`ThemeStore`]: the single named slot holding the current
//!   [`ThemeStyle`](crate::ThemeStyle) identifier, with observer notification
//!
//! Nothing here surfaces errors to callers. Reads of missing, corrupt, or
//! unrecognized data degrade to the default style; writes are
//! fire-and-forget.

mod backend;
mod error;
mod slot;

pub use backend::{MemoryBackend, PreferenceBackend, SettingsFile};
pub use error::SettingsError;
pub use slot::{ThemeStore, THEME_STYLE_KEY};
