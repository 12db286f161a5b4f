//! The theme application wrapper.

use crate::scheme::{self, SchemeScope};
use crate::store::ThemeStore;
use crate::style::ThemeStyle;

/// Wraps a content builder and renders it under the persisted appearance.
///
/// On every [`render`](AppTheme::render) pass the wrapper reads the store,
/// maps the style to an appearance override via
/// [`ThemeStyle::color_mode`], and evaluates the builder with that override
/// in scope. Everything the builder resolves through
/// [`effective_color_mode`](crate::effective_color_mode) — however deep —
/// sees the same mode, unless a descendant pushes its own override locally.
/// With `SystemDefault` nothing is pushed and the subtree inherits the OS
/// scheme.
///
/// The wrapper has no other side effects and offers no UI of its own;
/// changing the preference is the host's job, via [`ThemeStore::set`].
///
/// # Example
///
/// ```rust
/// use apptheme::{AppTheme, ColorMode, ThemeStore, ThemeStyle};
///
/// let store = ThemeStore::in_memory();
/// let themed = AppTheme::with_initial(store.clone(), ThemeStyle::Dark, || {
///     apptheme::effective_color_mode()
/// });
///
/// // `Dark` seeded the empty store, so the subtree renders dark.
/// assert_eq!(themed.render(), ColorMode::Dark);
///
/// store.set(ThemeStyle::Light);
/// assert_eq!(themed.render(), ColorMode::Light);
/// ```
pub struct AppTheme<F> {
    store: ThemeStore,
    content: F,
}

impl<F, V> AppTheme<F>
where
    F: Fn() -> V,
{
    /// Wrapper with `SystemDefault` as the initial style.
    pub fn new(store: ThemeStore, content: F) -> Self {
        Self::with_initial(store, ThemeStyle::SystemDefault, content)
    }

    /// Wrapper whose `initial` style seeds the store if the slot has never
    /// been written. An existing value, recognized or not, is left alone.
    pub fn with_initial(store: ThemeStore, initial: ThemeStyle, content: F) -> Self {
        store.seed(initial);
        Self { store, content }
    }

    /// The store this wrapper reads on each render pass.
    pub fn store(&self) -> &ThemeStore {
        &self.store
    }

    /// Evaluates the content builder under the current appearance override.
    pub fn render(&self) -> V {
        let _scope: Option<SchemeScope> = self.store.get().color_mode().map(scheme::push_scheme);
        (self.content)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::{effective_color_mode, set_scheme_detector, ColorMode};
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_system_default_inherits_detector() {
        set_scheme_detector(|| ColorMode::Dark);

        let themed = AppTheme::new(ThemeStore::in_memory(), effective_color_mode);
        assert_eq!(themed.render(), ColorMode::Dark);

        set_scheme_detector(|| ColorMode::Light);
        assert_eq!(themed.render(), ColorMode::Light);
    }

    #[test]
    #[serial]
    fn test_forced_style_overrides_detector() {
        set_scheme_detector(|| ColorMode::Dark);

        let store = ThemeStore::in_memory();
        let themed = AppTheme::new(store.clone(), effective_color_mode);

        store.set(ThemeStyle::Light);
        assert_eq!(themed.render(), ColorMode::Light);

        store.set(ThemeStyle::Dark);
        assert_eq!(themed.render(), ColorMode::Dark);
    }

    #[test]
    #[serial]
    fn test_override_is_scoped_to_the_render_pass() {
        set_scheme_detector(|| ColorMode::Light);

        let store = ThemeStore::in_memory();
        store.set(ThemeStyle::Dark);

        let themed = AppTheme::new(store, effective_color_mode);
        assert_eq!(themed.render(), ColorMode::Dark);
        // Outside the pass the ambient scheme is back in charge.
        assert_eq!(effective_color_mode(), ColorMode::Light);
    }

    #[test]
    fn test_initial_seeds_empty_store() {
        let store = ThemeStore::in_memory();
        let _themed = AppTheme::with_initial(store.clone(), ThemeStyle::Dark, || ());

        // An independent reader of the same slot observes the seed.
        assert_eq!(store.get(), ThemeStyle::Dark);
    }

    #[test]
    fn test_initial_does_not_clobber_existing_value() {
        let store = ThemeStore::in_memory();
        store.set(ThemeStyle::Light);

        let _themed = AppTheme::with_initial(store.clone(), ThemeStyle::Dark, || ());
        assert_eq!(store.get(), ThemeStyle::Light);
    }
}
