//! Preference mutation handler.
//!
//! Routes each message to its named mutator on the persisted singleton,
//! then re-synchronizes the app-wide dark flag - the flag must track the
//! preference on every mutation, not just dark-mode toggles.

use iced::Task;

use super::{MessageHandler, navigation};
use crate::message::{Message, PreferencesMessage};
use crate::state::AppState;
use crate::theme;

/// Handler for preference mutations.
pub struct PreferencesHandler;

impl MessageHandler<PreferencesMessage> for PreferencesHandler {
    fn handle(&self, state: &mut AppState, msg: PreferencesMessage) -> Task<Message> {
        match msg {
            PreferencesMessage::ToggleDarkMode => state.preferences.toggle_dark_mode(),

            PreferencesMessage::SetFontSize(size) => state.preferences.set_font_size(size),

            PreferencesMessage::ToggleSidebar => state.preferences.toggle_sidebar(),

            PreferencesMessage::SetOperatingSystem(os) => {
                state.preferences.set_operating_system(os);
                // The displayed shortcut list depends on the OS; rebuild the
                // cache so no stale list survives the change.
                navigation::refresh_shortcut_filter(state);
            }
        }

        theme::set_dark_mode(state.preferences.get().dark_mode);
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::NavTarget;
    use crate::test_support::{catalog, state_with};
    use guide_model::Platform;
    use guide_store::FontSize;

    fn handle(state: &mut AppState, msg: PreferencesMessage) {
        let _ = PreferencesHandler.handle(state, msg);
    }

    #[test]
    fn toggle_dark_mode_updates_preference_and_theme_flag() {
        let (_dir, mut state) = state_with(catalog());
        assert!(!state.prefs().dark_mode);

        handle(&mut state, PreferencesMessage::ToggleDarkMode);
        assert!(state.prefs().dark_mode);
        assert!(theme::is_dark());

        handle(&mut state, PreferencesMessage::ToggleDarkMode);
        assert!(!state.prefs().dark_mode);
        assert!(!theme::is_dark());
    }

    #[test]
    fn font_size_and_sidebar_mutations_apply() {
        let (_dir, mut state) = state_with(catalog());

        handle(
            &mut state,
            PreferencesMessage::SetFontSize(FontSize::Large),
        );
        assert_eq!(state.prefs().font_size, FontSize::Large);

        handle(&mut state, PreferencesMessage::ToggleSidebar);
        assert!(state.prefs().sidebar_collapsed);
    }

    #[test]
    fn os_change_refreshes_the_shortcut_filter() {
        let (_dir, mut state) = state_with(catalog());
        let _ = navigation::navigate(&mut state, NavTarget::subsection("basics", "a"));

        // Windows sees the all-platform and the windows-only shortcut.
        assert_eq!(state.shortcut_filter.shortcuts().len(), 2);

        handle(
            &mut state,
            PreferencesMessage::SetOperatingSystem(Platform::Linux),
        );
        assert_eq!(state.prefs().operating_system, Platform::Linux);
        assert_eq!(state.shortcut_filter.shortcuts().len(), 1);
    }
}
