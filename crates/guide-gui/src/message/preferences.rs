//! Preference mutation messages.

use guide_model::Platform;
use guide_store::FontSize;

/// Messages that mutate the persisted preferences singleton.
///
/// Each maps to exactly one named mutator; the handler additionally keeps
/// the app-wide dark flag in sync after every mutation.
#[derive(Debug, Clone, Copy)]
pub enum PreferencesMessage {
    ToggleDarkMode,
    SetFontSize(FontSize),
    ToggleSidebar,
    SetOperatingSystem(Platform),
}
