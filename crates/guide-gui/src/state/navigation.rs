//! Navigation state types.
//!
//! [`NavTarget`] is what the UI asks for; [`Route`] is where the app
//! actually is after resolution against the catalog (canonical redirect,
//! overview fallback, not-found). Resolution lives in
//! `handler::navigation`.

// =============================================================================
// ROUTE
// =============================================================================

/// Current page, after resolution.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Route {
    /// Home screen - resume card, section cards, bookmarks
    #[default]
    Home,

    /// Section overview - only for sections without lessons, or as the
    /// fallback for an unknown lesson id under a known section
    Section { section: String },

    /// A single lesson with its tabbed extras
    Subsection {
        section: String,
        subsection: String,
        /// Active tab within the lesson page
        tab: GuideTab,
    },

    /// Free-text search results
    Search { query: String },

    /// Terminal display state for an unknown section id
    NotFound { section: String },
}

impl Route {
    /// Get the current section id, if the route is inside the guide.
    pub fn section_id(&self) -> Option<&str> {
        match self {
            Self::Section { section } | Self::Subsection { section, .. } => Some(section),
            _ => None,
        }
    }

    /// Get the current lesson id if on a lesson page.
    pub fn subsection_id(&self) -> Option<&str> {
        match self {
            Self::Subsection { subsection, .. } => Some(subsection),
            _ => None,
        }
    }

    /// Check if this is the Home route.
    pub fn is_home(&self) -> bool {
        matches!(self, Self::Home)
    }
}

// =============================================================================
// NAVIGATION TARGET
// =============================================================================

/// A navigation request, before resolution against the catalog.
///
/// The route surface mirrors the app's logical paths: home,
/// `guide/{section}`, `guide/{section}/{subsection}`, and search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    Home,
    Section(String),
    Subsection { section: String, subsection: String },
    Search(String),
}

impl NavTarget {
    /// Convenience constructor for a lesson target.
    pub fn subsection(section: impl Into<String>, subsection: impl Into<String>) -> Self {
        Self::Subsection {
            section: section.into(),
            subsection: subsection.into(),
        }
    }
}

// =============================================================================
// GUIDE TAB
// =============================================================================

/// Tabs on the lesson page.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuideTab {
    /// Pro tips (default)
    #[default]
    Tips,

    /// Keyboard shortcuts, filtered by the selected operating system
    Shortcuts,

    /// Worked examples with numbered steps
    Examples,
}

impl GuideTab {
    /// Get the display name for this tab.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Tips => "Tips",
            Self::Shortcuts => "Shortcuts",
            Self::Examples => "Examples",
        }
    }

    /// Get all tabs in display order.
    pub const fn all() -> &'static [GuideTab] {
        &[Self::Tips, Self::Shortcuts, Self::Examples]
    }
}
