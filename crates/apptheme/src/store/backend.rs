//! Key-value backends for the persisted preference.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::SettingsError;

/// Minimal key-value persistence abstraction.
///
/// Decouples the store from the concrete settings mechanism so backends can
/// be swapped or mocked. Both operations are infallible by contract: a
/// backend that cannot read answers `None`, and a backend that cannot write
/// drops the write on the floor, leaving the previous value in place.
pub trait PreferenceBackend {
    /// Returns the stored value for `key`, if any.
    fn read(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`. Fire-and-forget.
    fn write(&self, key: &str, value: &str);
}

/// Durable backend: a flat JSON string map on disk.
///
/// The file is created (along with its parent directory) on first write.
/// Unrelated keys in the same file are preserved, so several preferences can
/// share one `settings.json`.
///
/// # Example
///
/// ```rust
/// use apptheme::{PreferenceBackend, SettingsFile};
///
/// let dir = tempfile::tempdir().unwrap();
/// let settings = SettingsFile::at_path(dir.path().join("settings.json"));
/// settings.write("AppThemeStyle", "Dark");
/// assert_eq!(settings.read("AppThemeStyle").as_deref(), Some("Dark"));
/// ```
#[derive(Debug, Clone)]
pub struct SettingsFile {
    path: PathBuf,
}

impl SettingsFile {
    /// Settings file under the platform config directory, e.g.
    /// `~/.config/<app>/settings.json` on Linux.
    ///
    /// Fails only when the platform exposes no config directory at all;
    /// [`ThemeStore::for_app`](super::ThemeStore::for_app) degrades to a
    /// session-only store in that case.
    pub fn for_app(app: &str) -> Result<Self, SettingsError> {
        let dir = dirs::config_dir().ok_or(SettingsError::NoConfigDir)?;
        Ok(Self::at_path(dir.join(app).join("settings.json")))
    }

    /// Settings file at an explicit path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The on-disk location of this settings file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, SettingsError> {
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn persist(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        // A corrupt existing file is treated as empty rather than blocking
        // the write; the next read sees a well-formed map again.
        let mut map = self.load().unwrap_or_default();
        map.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&map)?)?;
        Ok(())
    }
}

impl PreferenceBackend for SettingsFile {
    fn read(&self, key: &str) -> Option<String> {
        self.load().ok()?.remove(key)
    }

    fn write(&self, key: &str, value: &str) {
        let _ = self.persist(key, value);
    }
}

/// In-process backend for tests and previews. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    values: RefCell<BTreeMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceBackend for MemoryBackend {
    fn read(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}
