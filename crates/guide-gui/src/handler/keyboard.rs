//! Global keyboard shortcuts.
//!
//! - Escape: back to Home
//! - Left/Right arrows: previous/next lesson
//! - Cmd/Ctrl+B: toggle the sidebar
//! - Cmd/Ctrl+D: toggle dark mode

use iced::Task;
use iced::keyboard::key::Named;
use iced::keyboard::{Key, Modifiers};

use guide_model::NextTarget;

use super::navigation;
use crate::handler::{MessageHandler, PreferencesHandler};
use crate::message::{Message, PreferencesMessage};
use crate::state::{AppState, NavTarget, Route};

/// Handle a global key press.
pub fn handle_key_press(state: &mut AppState, key: Key, modifiers: Modifiers) -> Task<Message> {
    match key.as_ref() {
        Key::Named(Named::Escape) if !state.route.is_home() => {
            navigation::navigate(state, NavTarget::Home)
        }

        Key::Named(Named::ArrowLeft) if modifiers.is_empty() => go_prev(state),

        Key::Named(Named::ArrowRight) if modifiers.is_empty() => go_next(state),

        Key::Character("b") if modifiers.command() => {
            PreferencesHandler.handle(state, PreferencesMessage::ToggleSidebar)
        }

        Key::Character("d") if modifiers.command() => {
            PreferencesHandler.handle(state, PreferencesMessage::ToggleDarkMode)
        }

        _ => Task::none(),
    }
}

/// Arrow navigation: previous lesson within the current section.
fn go_prev(state: &mut AppState) -> Task<Message> {
    let Route::Subsection {
        section,
        subsection,
        ..
    } = &state.route
    else {
        return Task::none();
    };

    match state.catalog.prev_in_section(section, subsection) {
        Some(prev) => {
            let target = NavTarget::subsection(section.clone(), prev.id.clone());
            navigation::navigate(state, target)
        }
        None => Task::none(),
    }
}

/// Arrow navigation: next lesson, following catalog order across sections.
fn go_next(state: &mut AppState) -> Task<Message> {
    let Route::Subsection {
        section,
        subsection,
        ..
    } = &state.route
    else {
        return Task::none();
    };

    match state.catalog.next_target(section, subsection) {
        Some(NextTarget::Subsection {
            section,
            subsection,
        }) => navigation::navigate(state, NavTarget::Subsection {
            section,
            subsection,
        }),
        Some(NextTarget::Section { section }) => {
            navigation::navigate(state, NavTarget::Section(section))
        }
        Some(NextTarget::EndOfCatalog) | None => Task::none(),
    }
}
