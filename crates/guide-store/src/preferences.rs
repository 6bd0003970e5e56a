//! User display preferences - persisted singleton.
//!
//! Loaded from disk at startup (or synthesized from environment signals on
//! first run) and written back on every mutation. Always fully populated:
//! struct-level `#[serde(default)]` means a partial document can never leave
//! a field missing.

use serde::{Deserialize, Serialize};

use guide_model::{Platform, detect_platform};

use crate::CURRENT_SCHEMA_VERSION;
use crate::store::KvStore;

/// Storage key for the preferences document.
pub const PREFERENCES_KEY: &str = "preferences";

// =============================================================================
// FONT SIZE
// =============================================================================

/// Body text size preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    /// Human-readable label for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }

    /// Multiplier applied to the typography base sizes.
    pub fn scale(&self) -> f32 {
        match self {
            Self::Small => 0.85,
            Self::Medium => 1.0,
            Self::Large => 1.15,
        }
    }

    /// All sizes in picker order.
    pub const ALL: [FontSize; 3] = [Self::Small, Self::Medium, Self::Large];
}

impl std::fmt::Display for FontSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// ENVIRONMENT SIGNALS
// =============================================================================

/// Environment signals consumed once, at first load, to synthesize defaults.
///
/// Kept as plain data so default synthesis stays testable with literal
/// values instead of a real desktop session.
#[derive(Debug, Clone)]
pub struct EnvSignals {
    /// System color-scheme preference.
    pub prefers_dark: bool,
    /// Raw platform hint, matched by [`detect_platform`].
    pub platform_hint: String,
}

impl EnvSignals {
    /// Capture signals from the running system.
    pub fn capture() -> Self {
        let prefers_dark = matches!(dark_light::detect(), Ok(dark_light::Mode::Dark));
        Self {
            prefers_dark,
            platform_hint: std::env::consts::OS.to_string(),
        }
    }
}

// =============================================================================
// USER PREFERENCES
// =============================================================================

/// Display and runtime preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserPreferences {
    pub schema_version: u32,
    pub dark_mode: bool,
    pub font_size: FontSize,
    pub sidebar_collapsed: bool,
    /// Selects which keyboard shortcuts are displayed.
    pub operating_system: Platform,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            dark_mode: false,
            font_size: FontSize::default(),
            sidebar_collapsed: false,
            operating_system: Platform::default(),
        }
    }
}

impl UserPreferences {
    /// Synthesize first-run preferences from environment signals.
    pub fn from_env(signals: &EnvSignals) -> Self {
        Self {
            dark_mode: signals.prefers_dark,
            operating_system: detect_platform(&signals.platform_hint),
            ..Self::default()
        }
    }

    /// Upgrade older document shapes to the current schema.
    ///
    /// Returns `true` when the document changed and should be written back.
    fn migrate(&mut self) -> bool {
        if self.schema_version < CURRENT_SCHEMA_VERSION {
            // Version bumps add their upgrade steps here.
            self.schema_version = CURRENT_SCHEMA_VERSION;
            true
        } else {
            false
        }
    }
}

// =============================================================================
// PREFERENCES STATE
// =============================================================================

/// The preferences singleton plus its store handle.
///
/// All mutation goes through the named methods below; each produces a new
/// value with exactly one field changed, persists it, then commits it, so
/// other readers in the process never observe a partial update.
#[derive(Debug)]
pub struct PreferencesState {
    store: KvStore,
    current: UserPreferences,
}

impl PreferencesState {
    /// Load from the store, synthesizing defaults from `signals` when no
    /// usable document exists.
    pub fn load(store: KvStore, signals: &EnvSignals) -> Self {
        let mut current: UserPreferences =
            store.read_or_else(PREFERENCES_KEY, || UserPreferences::from_env(signals));
        if current.migrate() {
            store.write(PREFERENCES_KEY, &current);
        }
        Self { store, current }
    }

    /// Current preferences.
    pub fn get(&self) -> &UserPreferences {
        &self.current
    }

    fn commit(&mut self, next: UserPreferences) {
        self.store.write(PREFERENCES_KEY, &next);
        self.current = next;
    }

    pub fn toggle_dark_mode(&mut self) {
        let mut next = self.current.clone();
        next.dark_mode = !next.dark_mode;
        self.commit(next);
    }

    pub fn set_font_size(&mut self, size: FontSize) {
        let mut next = self.current.clone();
        next.font_size = size;
        self.commit(next);
    }

    pub fn toggle_sidebar(&mut self) {
        let mut next = self.current.clone();
        next.sidebar_collapsed = !next.sidebar_collapsed;
        self.commit(next);
    }

    pub fn set_operating_system(&mut self, os: Platform) {
        let mut next = self.current.clone();
        next.operating_system = os;
        self.commit(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals(hint: &str, dark: bool) -> EnvSignals {
        EnvSignals {
            prefers_dark: dark,
            platform_hint: hint.to_string(),
        }
    }

    fn store() -> (tempfile::TempDir, KvStore) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = KvStore::at(dir.path());
        (dir, store)
    }

    #[test]
    fn first_load_synthesizes_from_signals() {
        let (_dir, store) = store();
        let prefs = PreferencesState::load(store, &signals("linux", true));
        assert_eq!(prefs.get().operating_system, Platform::Linux);
        assert!(prefs.get().dark_mode);
        assert_eq!(prefs.get().font_size, FontSize::Medium);
        assert!(!prefs.get().sidebar_collapsed);
    }

    #[test]
    fn unrecognized_platform_hint_defaults_to_windows() {
        let (_dir, store) = store();
        let prefs = PreferencesState::load(store, &signals("solaris", false));
        assert_eq!(prefs.get().operating_system, Platform::Windows);
    }

    #[test]
    fn mutations_change_exactly_one_field() {
        let (_dir, store) = store();
        let mut prefs = PreferencesState::load(store, &signals("macos", false));
        let before = prefs.get().clone();

        prefs.toggle_dark_mode();
        assert_eq!(
            prefs.get(),
            &UserPreferences {
                dark_mode: true,
                ..before.clone()
            }
        );

        prefs.set_font_size(FontSize::Large);
        assert_eq!(prefs.get().font_size, FontSize::Large);
        assert!(prefs.get().dark_mode);
        assert_eq!(prefs.get().operating_system, Platform::Mac);
    }

    #[test]
    fn mutations_survive_a_fresh_load() {
        let (_dir, store) = store();
        {
            let mut prefs = PreferencesState::load(store.clone(), &signals("macos", false));
            prefs.toggle_dark_mode();
            prefs.toggle_sidebar();
            prefs.set_operating_system(Platform::Linux);
            prefs.set_font_size(FontSize::Small);
        }

        // Fresh load; signals now disagree with the stored document and must
        // not win.
        let reloaded = PreferencesState::load(store, &signals("windows", false));
        assert_eq!(
            reloaded.get(),
            &UserPreferences {
                schema_version: CURRENT_SCHEMA_VERSION,
                dark_mode: true,
                font_size: FontSize::Small,
                sidebar_collapsed: true,
                operating_system: Platform::Linux,
            }
        );
    }

    #[test]
    fn corrupt_document_falls_back_to_synthesis() {
        let (dir, store) = store();
        std::fs::write(dir.path().join("preferences.json"), "nonsense").expect("write");
        let prefs = PreferencesState::load(store, &signals("linux", false));
        assert_eq!(prefs.get().operating_system, Platform::Linux);
    }

    #[test]
    fn partial_document_fills_missing_fields() {
        let (dir, store) = store();
        std::fs::write(dir.path().join("preferences.json"), r#"{ "darkMode": true }"#)
            .expect("write");
        let prefs = PreferencesState::load(store, &signals("linux", false));
        assert!(prefs.get().dark_mode);
        // Missing fields come from the document defaults, not the signals.
        assert_eq!(prefs.get().operating_system, Platform::Windows);
        assert_eq!(prefs.get().font_size, FontSize::Medium);
    }

    #[test]
    fn old_schema_version_is_migrated_and_written_back() {
        let (dir, store) = store();
        std::fs::write(
            dir.path().join("preferences.json"),
            r#"{ "schemaVersion": 0, "darkMode": true }"#,
        )
        .expect("write");

        let prefs = PreferencesState::load(store.clone(), &signals("windows", false));
        assert_eq!(prefs.get().schema_version, CURRENT_SCHEMA_VERSION);

        let on_disk: UserPreferences =
            store.read_or_else(PREFERENCES_KEY, || panic!("document should exist"));
        assert_eq!(on_disk.schema_version, CURRENT_SCHEMA_VERSION);
        assert!(on_disk.dark_mode);
    }
}
