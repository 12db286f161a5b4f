//! The theme state store: one durable slot plus observer notification.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::backend::{MemoryBackend, PreferenceBackend, SettingsFile};
use crate::style::ThemeStyle;

/// Settings key under which the current [`ThemeStyle`] identifier lives.
///
/// Host applications that want to read or write the preference without going
/// through [`ThemeStore`] can address the slot directly with this key.
pub const THEME_STYLE_KEY: &str = "AppThemeStyle";

type Observer = Box<dyn Fn(ThemeStyle)>;

/// Shared handle to the persisted theme preference.
///
/// Cloning is cheap; every clone refers to the same slot and observer list.
/// The store assumes the single-threaded, event-driven execution model of a
/// UI loop: writes happen in response to discrete input events, are
/// fire-and-forget, and last-write-wins.
///
/// # Example
///
/// ```rust
/// use apptheme::{ThemeStore, ThemeStyle};
///
/// let store = ThemeStore::in_memory();
/// assert_eq!(store.get(), ThemeStyle::SystemDefault);
///
/// store.set(ThemeStyle::Light);
/// assert_eq!(store.get(), ThemeStyle::Light);
/// ```
#[derive(Clone)]
pub struct ThemeStore {
    inner: Rc<Inner>,
}

struct Inner {
    backend: Box<dyn PreferenceBackend>,
    observers: RefCell<Vec<Observer>>,
}

impl ThemeStore {
    /// Store over an explicit backend.
    pub fn with_backend(backend: impl PreferenceBackend + 'static) -> Self {
        Self {
            inner: Rc::new(Inner {
                backend: Box::new(backend),
                observers: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Durable store for `app`, backed by its settings file.
    ///
    /// On platforms without a per-user config directory this degrades to a
    /// session-only in-memory store rather than failing.
    pub fn for_app(app: &str) -> Self {
        match SettingsFile::for_app(app) {
            Ok(settings) => Self::with_backend(settings),
            Err(_) => Self::in_memory(),
        }
    }

    /// Session-only store for tests and previews.
    pub fn in_memory() -> Self {
        Self::with_backend(MemoryBackend::new())
    }

    /// The currently persisted style.
    ///
    /// An absent slot or an unrecognized stored value reads as
    /// [`ThemeStyle::SystemDefault`]; this never fails.
    pub fn get(&self) -> ThemeStyle {
        self.inner
            .backend
            .read(THEME_STYLE_KEY)
            .and_then(|raw| ThemeStyle::from_identifier(&raw))
            .unwrap_or_default()
    }

    /// Persists `style`, then notifies every subscriber with the new value.
    ///
    /// Safe to call from event handlers; a failed write leaves the previous
    /// value in place and still notifies (the UI re-renders from `get`, so
    /// it can never show a state the store wouldn't report).
    pub fn set(&self, style: ThemeStyle) {
        self.inner.backend.write(THEME_STYLE_KEY, style.identifier());
        for observer in self.inner.observers.borrow().iter() {
            observer(style);
        }
    }

    /// Registers an observer invoked after every [`set`](ThemeStore::set).
    ///
    /// Observers live as long as the store; there is no unsubscribe, matching
    /// the lifetime of a UI that re-renders until the process exits.
    pub fn subscribe(&self, observer: impl Fn(ThemeStyle) + 'static) {
        self.inner.observers.borrow_mut().push(Box::new(observer));
    }

    /// Seeds the slot with `initial` if nothing has ever been written.
    ///
    /// A present but unrecognized value counts as written: seeding must not
    /// clobber data a newer format may have stored.
    pub fn seed(&self, initial: ThemeStyle) {
        if self.inner.backend.read(THEME_STYLE_KEY).is_none() {
            self.inner.backend.write(THEME_STYLE_KEY, initial.identifier());
        }
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("observers", &self.inner.observers.borrow().len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_round_trip_all_styles() {
        let store = ThemeStore::in_memory();
        for style in ThemeStyle::ALL {
            store.set(style);
            assert_eq!(store.get(), style);
        }
    }

    #[test]
    fn test_unwritten_store_reads_system_default() {
        assert_eq!(ThemeStore::in_memory().get(), ThemeStyle::SystemDefault);
    }

    #[test]
    fn test_unrecognized_value_reads_system_default() {
        let backend = MemoryBackend::new();
        backend.write(THEME_STYLE_KEY, "Solarized");

        let store = ThemeStore::with_backend(backend);
        assert_eq!(store.get(), ThemeStyle::SystemDefault);
    }

    #[test]
    fn test_clones_share_the_slot() {
        let store = ThemeStore::in_memory();
        let clone = store.clone();

        store.set(ThemeStyle::Dark);
        assert_eq!(clone.get(), ThemeStyle::Dark);
    }

    #[test]
    fn test_observer_fires_with_new_value() {
        let store = ThemeStore::in_memory();
        let seen = Rc::new(Cell::new(None));

        let sink = Rc::clone(&seen);
        store.subscribe(move |style| sink.set(Some(style)));

        store.set(ThemeStyle::Light);
        assert_eq!(seen.get(), Some(ThemeStyle::Light));
    }

    #[test]
    fn test_seed_only_fills_empty_slot() {
        let store = ThemeStore::in_memory();
        store.seed(ThemeStyle::Dark);
        assert_eq!(store.get(), ThemeStyle::Dark);

        store.seed(ThemeStyle::Light);
        assert_eq!(store.get(), ThemeStyle::Dark, "seed must not overwrite");
    }

    #[test]
    fn test_seed_respects_unrecognized_existing_value() {
        let backend = MemoryBackend::new();
        backend.write(THEME_STYLE_KEY, "FutureStyle");
        let raw = backend.read(THEME_STYLE_KEY);
        assert_eq!(raw.as_deref(), Some("FutureStyle"));

        let store = ThemeStore::with_backend(backend);
        store.seed(ThemeStyle::Dark);
        // Reads degrade to the default, but the stored bytes stay untouched.
        assert_eq!(store.get(), ThemeStyle::SystemDefault);
    }
}
