//! Message module for Guide Studio.
//!
//! This module defines the message hierarchy for the Elm-style
//! architecture. All user interactions and events flow through these
//! message types.

pub mod guide;
pub mod preferences;

use iced::keyboard;

use crate::state::NavTarget;

pub use guide::GuideMessage;
pub use preferences::PreferencesMessage;

/// Root message enum for the application.
///
/// All user interactions and system events are represented as variants of
/// this enum. The `update` function processes these messages to modify
/// application state.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // Navigation
    // =========================================================================
    /// Navigate to a target; resolution (canonical redirect, not-found)
    /// happens in the navigation handler
    Navigate(NavTarget),

    // =========================================================================
    // Feature messages
    // =========================================================================
    /// Lesson page messages (tabs, bookmarks, completion)
    Guide(GuideMessage),

    /// Preference mutations
    Preferences(PreferencesMessage),

    // =========================================================================
    // Search
    // =========================================================================
    /// Header search box text changed
    SearchInputChanged(String),

    /// Header search box submitted
    SearchSubmitted,

    // =========================================================================
    // Global events
    // =========================================================================
    /// Keyboard event
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    /// Open an external URL in the system browser
    OpenUrl(String),

    /// No operation - used for placeholder actions
    Noop,
}

impl Message {
    /// Creates a navigation message to go to the home view.
    pub fn go_home() -> Self {
        Self::Navigate(NavTarget::Home)
    }

    /// Creates a navigation message for a section route.
    pub fn go_section(section: impl Into<String>) -> Self {
        Self::Navigate(NavTarget::Section(section.into()))
    }

    /// Creates a navigation message for a lesson route.
    pub fn go_subsection(section: impl Into<String>, subsection: impl Into<String>) -> Self {
        Self::Navigate(NavTarget::subsection(section, subsection))
    }
}
