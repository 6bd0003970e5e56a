//! Catalog lookup, traversal, and search.
//!
//! The catalog is an ordered sequence of sections. Traversal order is
//! subsection order within a section, then the next section in catalog
//! order; [`NextTarget`] encodes where "next" lands from the last lesson of
//! a section.

use thiserror::Error;

use crate::section::{Section, Subsection};

/// Catalog construction/validation errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed catalog: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("duplicate section id: {0}")]
    DuplicateSection(String),

    #[error("duplicate subsection id: {0}")]
    DuplicateSubsection(String),
}

/// Where forward traversal lands from a given position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextTarget {
    /// Another lesson, possibly in a later section.
    Subsection { section: String, subsection: String },
    /// A later section without lessons of its own.
    Section { section: String },
    /// The current position is the last lesson of the last section.
    EndOfCatalog,
}

/// An immutable, ordered set of guide sections.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    sections: Vec<Section>,
}

impl Catalog {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// All sections in catalog order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Check id uniqueness across the whole catalog.
    ///
    /// Subsection ids must be globally unique because progress lookups treat
    /// them as such.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut section_ids = std::collections::HashSet::new();
        let mut subsection_ids = std::collections::HashSet::new();
        for section in &self.sections {
            if !section_ids.insert(section.id.as_str()) {
                return Err(CatalogError::DuplicateSection(section.id.clone()));
            }
            for subsection in &section.subsections {
                if !subsection_ids.insert(subsection.id.as_str()) {
                    return Err(CatalogError::DuplicateSubsection(subsection.id.clone()));
                }
            }
        }
        Ok(())
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn section_index(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    pub fn subsection(&self, section_id: &str, subsection_id: &str) -> Option<&Subsection> {
        self.section(section_id)?
            .subsections
            .iter()
            .find(|s| s.id == subsection_id)
    }

    /// Find the section that owns a subsection id anywhere in the catalog.
    pub fn locate_subsection(&self, subsection_id: &str) -> Option<(&Section, &Subsection)> {
        self.sections.iter().find_map(|section| {
            section
                .subsections
                .iter()
                .find(|s| s.id == subsection_id)
                .map(|sub| (section, sub))
        })
    }

    // ========================================================================
    // Traversal
    // ========================================================================

    /// The lesson before `subsection_id` within the same section.
    ///
    /// `None` at the first lesson; there is no backward traversal across
    /// section boundaries.
    pub fn prev_in_section(&self, section_id: &str, subsection_id: &str) -> Option<&Subsection> {
        let section = self.section(section_id)?;
        let index = section.subsection_index(subsection_id)?;
        if index == 0 {
            None
        } else {
            section.subsections.get(index - 1)
        }
    }

    /// The lesson after `subsection_id` within the same section.
    pub fn next_in_section(&self, section_id: &str, subsection_id: &str) -> Option<&Subsection> {
        let section = self.section(section_id)?;
        let index = section.subsection_index(subsection_id)?;
        section.subsections.get(index + 1)
    }

    /// Where "next" lands from the given position.
    ///
    /// Within a section this is the following lesson. From the last lesson it
    /// is the first lesson of the next section in catalog order, or that
    /// section itself when it has no lessons, or [`NextTarget::EndOfCatalog`]
    /// when there is no next section. Returns `None` only when the position
    /// itself does not exist.
    pub fn next_target(&self, section_id: &str, subsection_id: &str) -> Option<NextTarget> {
        if let Some(next) = self.next_in_section(section_id, subsection_id) {
            return Some(NextTarget::Subsection {
                section: section_id.to_string(),
                subsection: next.id.clone(),
            });
        }

        // Position must exist even when there is nothing after it.
        self.subsection(section_id, subsection_id)?;

        let index = self.section_index(section_id)?;
        match self.sections.get(index + 1) {
            Some(next_section) => match next_section.first_subsection() {
                Some(first) => Some(NextTarget::Subsection {
                    section: next_section.id.clone(),
                    subsection: first.id.clone(),
                }),
                None => Some(NextTarget::Section {
                    section: next_section.id.clone(),
                }),
            },
            None => Some(NextTarget::EndOfCatalog),
        }
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Case-insensitive substring search over titles, descriptions, and
    /// lesson content. An empty or whitespace query matches nothing.
    pub fn search(&self, query: &str) -> Vec<SearchHit<'_>> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let matches = |text: &str| text.to_lowercase().contains(&query);

        let mut hits = Vec::new();
        for section in &self.sections {
            if matches(&section.title) || matches(&section.description) {
                hits.push(SearchHit {
                    section,
                    subsection: None,
                });
            }
            for subsection in &section.subsections {
                if matches(&subsection.title) || matches(&subsection.content) {
                    hits.push(SearchHit {
                        section,
                        subsection: Some(subsection),
                    });
                }
            }
        }
        hits
    }
}

/// A single search result, pointing at a section or one of its lessons.
#[derive(Debug, Clone, Copy)]
pub struct SearchHit<'a> {
    pub section: &'a Section,
    pub subsection: Option<&'a Subsection>,
}
