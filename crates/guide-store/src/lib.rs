//! Persisted user state for Guide Studio.
//!
//! Two independent JSON documents live in the per-user config directory:
//! `preferences.json` (display settings) and `progress.json` (completion,
//! bookmarks, last-visited). Both are read once at startup and written back
//! on every mutation.
//!
//! # Durability contract
//!
//! - Reads fail open: an absent, unreadable, or malformed document yields a
//!   computed default, never an error.
//! - Writes are fire-and-forget: failures are swallowed and logged, never
//!   surfaced to the caller.
//!
//! # Architecture
//!
//! - [`KvStore`] - string-keyed JSON document store (one file per key)
//! - [`PreferencesState`] / [`ProgressState`] - the two singletons, owned by
//!   the application state and mutated only through their named methods

mod error;
mod preferences;
mod progress;
mod store;

pub use error::StoreError;
pub use preferences::{
    EnvSignals, FontSize, PREFERENCES_KEY, PreferencesState, UserPreferences,
};
pub use progress::{PROGRESS_KEY, ProgressState, UserProgress};
pub use store::KvStore;

/// Schema version stamped into both persisted documents.
///
/// Bumping this requires a matching arm in the documents' `migrate()` hooks.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;
