//! User progress tracking - persisted singleton.
//!
//! Completion and bookmarks are sets of subsection ids, giving O(lookup)
//! membership and no duplicates by construction. `last_visited` is a single
//! id, overwritten on every guide navigation.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::CURRENT_SCHEMA_VERSION;
use crate::store::KvStore;

/// Storage key for the progress document.
pub const PROGRESS_KEY: &str = "progress";

/// Completion, bookmark, and last-visited tracking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserProgress {
    pub schema_version: u32,
    pub completed: HashSet<String>,
    pub bookmarked: HashSet<String>,
    pub last_visited: Option<String>,
}

impl Default for UserProgress {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            completed: HashSet::new(),
            bookmarked: HashSet::new(),
            last_visited: None,
        }
    }
}

impl UserProgress {
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

/// The progress singleton plus its store handle.
///
/// Mutators are synchronous read-modify-write on the owned value; mutators
/// that change nothing skip the store write, so re-marking a completed
/// lesson is a no-op all the way down to disk.
#[derive(Debug)]
pub struct ProgressState {
    store: KvStore,
    current: UserProgress,
}

impl ProgressState {
    /// Load from the store, starting empty when no usable document exists.
    pub fn load(store: KvStore) -> Self {
        let mut current: UserProgress = store.read_or_else(PROGRESS_KEY, UserProgress::default);
        if current.migrate() {
            store.write(PROGRESS_KEY, &current);
        }
        Self { store, current }
    }

    /// Current progress.
    pub fn get(&self) -> &UserProgress {
        &self.current
    }

    fn persist(&self) {
        self.store.write(PROGRESS_KEY, &self.current);
    }

    // ========================================================================
    // Completion
    // ========================================================================

    pub fn is_completed(&self, id: &str) -> bool {
        self.current.completed.contains(id)
    }

    /// Mark a lesson completed. Idempotent.
    pub fn mark_completed(&mut self, id: &str) {
        if self.current.completed.insert(id.to_string()) {
            self.persist();
        }
    }

    /// Remove a lesson's completion mark. No-op when not completed.
    pub fn mark_incomplete(&mut self, id: &str) {
        if self.current.completed.remove(id) {
            self.persist();
        }
    }

    // ========================================================================
    // Bookmarks
    // ========================================================================

    pub fn is_bookmarked(&self, id: &str) -> bool {
        self.current.bookmarked.contains(id)
    }

    /// Flip bookmark membership for `id` exactly once.
    pub fn toggle_bookmark(&mut self, id: &str) {
        if !self.current.bookmarked.insert(id.to_string()) {
            self.current.bookmarked.remove(id);
        }
        self.persist();
    }

    // ========================================================================
    // Last visited
    // ========================================================================

    pub fn last_visited(&self) -> Option<&str> {
        self.current.last_visited.as_deref()
    }

    /// Unconditionally record the most recently visited page id.
    pub fn set_last_visited(&mut self, id: &str) {
        self.current.last_visited = Some(id.to_string());
        self.persist();
    }
}
