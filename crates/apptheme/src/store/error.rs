//! Error types for the settings backend.

use std::io;

/// Errors that can occur while reading or writing the settings file.
///
/// These never cross the public store API: reads degrade to the default
/// style and writes are fire-and-forget. The type exists so the fallible
/// internals stay honest about what can go wrong.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The platform exposes no per-user config directory.
    #[error("no per-user config directory on this platform")]
    NoConfigDir,

    /// Failed to read, create, or write the settings file.
    #[error("settings file I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The settings file exists but is not a flat string map.
    #[error("settings file is not a flat string map: {0}")]
    Malformed(#[from] serde_json::Error),
}
