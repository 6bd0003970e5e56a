//! Application-level state.
//!
//! `AppState` is the root of all state. It owns the immutable catalog, the
//! two persisted singletons, and the navigation state; every mutation
//! happens inside the update loop, so views always observe a consistent
//! snapshot.

use guide_model::Catalog;
use guide_store::{EnvSignals, KvStore, PreferencesState, ProgressState, UserPreferences};

use super::derived::ShortcutFilter;
use super::navigation::Route;
use crate::theme;

/// Top-level application state.
pub struct AppState {
    /// Read-only guide content.
    pub catalog: Catalog,
    /// Persisted display preferences.
    pub preferences: PreferencesState,
    /// Persisted completion/bookmark/last-visited tracking.
    pub progress: ProgressState,
    /// Current page.
    pub route: Route,
    /// Draft text in the header search box.
    pub search_input: String,
    /// Cached platform-filtered shortcuts for the current lesson.
    pub shortcut_filter: ShortcutFilter,
    /// Lesson id whose mark-complete transition is awaiting its delay.
    ///
    /// While set, re-triggering the composite action is ignored.
    pub pending_advance: Option<String>,
}

impl AppState {
    /// Create production state: built-in catalog, default store location,
    /// captured environment signals.
    pub fn new() -> Self {
        let catalog = guide_model::load_builtin().unwrap_or_else(|err| {
            tracing::error!("failed to load built-in guide content: {err}");
            Catalog::default()
        });
        Self::with_store(catalog, KvStore::open_default(), &EnvSignals::capture())
    }

    /// Create state against an explicit catalog and store.
    ///
    /// This is the seam the handler tests use: a tempdir-backed store and a
    /// small synthetic catalog.
    pub fn with_store(catalog: Catalog, store: KvStore, signals: &EnvSignals) -> Self {
        let preferences = PreferencesState::load(store.clone(), signals);
        let progress = ProgressState::load(store);

        // Keep the app-wide dark flag in sync with the loaded preferences;
        // the theme callback reads the flag, not the preferences.
        theme::set_dark_mode(preferences.get().dark_mode);

        Self {
            catalog,
            preferences,
            progress,
            route: Route::default(),
            search_input: String::new(),
            shortcut_filter: ShortcutFilter::default(),
            pending_advance: None,
        }
    }

    /// Current preferences snapshot.
    pub fn prefs(&self) -> &UserPreferences {
        self.preferences.get()
    }
}
