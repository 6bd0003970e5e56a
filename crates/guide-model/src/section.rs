//! Catalog content types.
//!
//! These mirror the shape of the embedded guide content. All of them are
//! immutable once deserialized; user state (completion, bookmarks) keys off
//! the `id` fields and lives elsewhere.

use serde::{Deserialize, Serialize};

use crate::platform::{Platform, ShortcutPlatform};

/// A top-level guide section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Unique id, also the section's route segment.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Lucide icon name rendered on cards and in the sidebar.
    pub icon: String,
    /// Ordered lessons. A section may have none and render as a plain page.
    #[serde(default)]
    pub subsections: Vec<Subsection>,
}

impl Section {
    /// The canonical child: the first subsection, if any.
    pub fn first_subsection(&self) -> Option<&Subsection> {
        self.subsections.first()
    }

    /// Index of a subsection within this section.
    pub fn subsection_index(&self, subsection_id: &str) -> Option<usize> {
        self.subsections.iter().position(|s| s.id == subsection_id)
    }
}

/// A single lesson within a section.
///
/// Subsection ids are unique within their section but treated as globally
/// unique by progress lookups, so the embedded catalog keeps them globally
/// unique outright (enforced by `Catalog::validate`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subsection {
    pub id: String,
    pub title: String,
    /// Body text of the lesson.
    pub content: String,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default)]
    pub shortcuts: Vec<Shortcut>,
    #[serde(default)]
    pub examples: Vec<Example>,
}

impl Subsection {
    /// Shortcuts visible for the given platform, in catalog order.
    pub fn visible_shortcuts(&self, platform: Platform) -> impl Iterator<Item = &Shortcut> {
        self.shortcuts
            .iter()
            .filter(move |s| s.platform.matches(platform))
    }
}

/// A keyboard shortcut, as a sequence of key labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shortcut {
    /// Key labels in press order, e.g. `["Ctrl", "Shift", "P"]`.
    pub keys: Vec<String>,
    pub description: String,
    /// Audience; omitted in the catalog for shortcuts that apply everywhere.
    #[serde(default)]
    pub platform: ShortcutPlatform,
}

/// A worked example with numbered steps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Example {
    pub title: String,
    pub description: String,
    pub steps: Vec<String>,
}
