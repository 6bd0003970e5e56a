//! Lesson page message handler.
//!
//! Handles tab switching, bookmarking, and the "mark complete and advance"
//! composite action. The advance is the app's only timer: a fixed cosmetic
//! pause between marking a lesson done and moving to the next page.

use std::time::Duration;

use iced::Task;

use guide_model::NextTarget;

use super::{MessageHandler, navigation};
use crate::message::{GuideMessage, Message};
use crate::state::{AppState, NavTarget, Route};

/// Fixed UI-feedback pause before post-completion navigation.
const ADVANCE_DELAY: Duration = Duration::from_millis(300);

/// Handler for lesson page messages.
pub struct GuideHandler;

impl MessageHandler<GuideMessage> for GuideHandler {
    fn handle(&self, state: &mut AppState, msg: GuideMessage) -> Task<Message> {
        match msg {
            GuideMessage::SelectTab(tab) => {
                if let Route::Subsection { tab: current, .. } = &mut state.route {
                    *current = tab;
                }
                Task::none()
            }

            GuideMessage::ToggleBookmark(id) => {
                state.progress.toggle_bookmark(&id);
                Task::none()
            }

            GuideMessage::MarkIncomplete(id) => {
                state.progress.mark_incomplete(&id);
                Task::none()
            }

            GuideMessage::MarkComplete(id) => handle_mark_complete(state, id),

            GuideMessage::AdvanceElapsed { from, target } => {
                handle_advance_elapsed(state, &from, target)
            }
        }
    }
}

/// Mark a lesson completed and schedule the advance to the next page.
///
/// Idempotent per transition: while an advance is pending, re-triggering
/// the action is ignored, so the navigation cannot be double-scheduled.
fn handle_mark_complete(state: &mut AppState, id: String) -> Task<Message> {
    if state.pending_advance.is_some() {
        return Task::none();
    }

    state.progress.mark_completed(&id);

    let Some(section) = state.route.section_id() else {
        return Task::none();
    };
    // The target is computed now, against the position being completed, and
    // carried through the timer message.
    let Some(target) = state.catalog.next_target(section, &id) else {
        return Task::none();
    };

    state.pending_advance = Some(id.clone());
    Task::perform(
        async { tokio::time::sleep(ADVANCE_DELAY).await },
        move |()| {
            Message::Guide(GuideMessage::AdvanceElapsed {
                from: id.clone(),
                target: target.clone(),
            })
        },
    )
}

/// The advance delay elapsed: clear the guard and navigate.
fn handle_advance_elapsed(state: &mut AppState, from: &str, target: NextTarget) -> Task<Message> {
    if state.pending_advance.as_deref() == Some(from) {
        state.pending_advance = None;
    }

    match target {
        NextTarget::Subsection {
            section,
            subsection,
        } => navigation::navigate(state, NavTarget::Subsection {
            section,
            subsection,
        }),
        NextTarget::Section { section } => navigation::navigate(state, NavTarget::Section(section)),
        NextTarget::EndOfCatalog => navigation::navigate(state, NavTarget::Home),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::GuideTab;
    use crate::test_support::{catalog, state_with};

    fn handle(state: &mut AppState, msg: GuideMessage) {
        let _ = GuideHandler.handle(state, msg);
    }

    #[test]
    fn mark_complete_records_completion_and_sets_the_guard() {
        let (_dir, mut state) = state_with(catalog());
        let _ = navigation::navigate(&mut state, NavTarget::subsection("basics", "a"));

        handle(&mut state, GuideMessage::MarkComplete("a".to_string()));
        assert!(state.progress.is_completed("a"));
        assert_eq!(state.pending_advance.as_deref(), Some("a"));
    }

    #[test]
    fn retrigger_while_pending_is_ignored() {
        let (_dir, mut state) = state_with(catalog());
        let _ = navigation::navigate(&mut state, NavTarget::subsection("basics", "a"));

        handle(&mut state, GuideMessage::MarkComplete("a".to_string()));
        // The user clicks again before the delay elapses; nothing changes
        // and no second transition is scheduled.
        handle(&mut state, GuideMessage::MarkComplete("a".to_string()));
        assert_eq!(state.pending_advance.as_deref(), Some("a"));
    }

    #[test]
    fn advance_elapsed_clears_guard_and_navigates_to_next_lesson() {
        let (_dir, mut state) = state_with(catalog());
        let _ = navigation::navigate(&mut state, NavTarget::subsection("basics", "a"));
        handle(&mut state, GuideMessage::MarkComplete("a".to_string()));

        handle(&mut state, GuideMessage::AdvanceElapsed {
            from: "a".to_string(),
            target: NextTarget::Subsection {
                section: "basics".to_string(),
                subsection: "b".to_string(),
            },
        });

        assert!(state.pending_advance.is_none());
        assert_eq!(state.route.subsection_id(), Some("b"));
        // A new completion can be triggered again afterwards.
        handle(&mut state, GuideMessage::MarkComplete("b".to_string()));
        assert_eq!(state.pending_advance.as_deref(), Some("b"));
    }

    #[test]
    fn advance_at_end_of_catalog_returns_home() {
        let (_dir, mut state) = state_with(catalog());
        let _ = navigation::navigate(&mut state, NavTarget::subsection("advanced", "y"));
        handle(&mut state, GuideMessage::MarkComplete("y".to_string()));

        handle(&mut state, GuideMessage::AdvanceElapsed {
            from: "y".to_string(),
            target: NextTarget::EndOfCatalog,
        });
        assert!(state.route.is_home());
    }

    #[test]
    fn mark_incomplete_undoes_completion_without_navigation() {
        let (_dir, mut state) = state_with(catalog());
        let _ = navigation::navigate(&mut state, NavTarget::subsection("basics", "a"));

        state.progress.mark_completed("a");
        handle(&mut state, GuideMessage::MarkIncomplete("a".to_string()));
        assert!(!state.progress.is_completed("a"));
        assert_eq!(state.route.subsection_id(), Some("a"));
        assert!(state.pending_advance.is_none());
    }

    #[test]
    fn select_tab_only_touches_lesson_routes() {
        let (_dir, mut state) = state_with(catalog());

        handle(&mut state, GuideMessage::SelectTab(GuideTab::Examples));
        assert!(state.route.is_home());

        let _ = navigation::navigate(&mut state, NavTarget::subsection("basics", "a"));
        handle(&mut state, GuideMessage::SelectTab(GuideTab::Shortcuts));
        assert_eq!(
            state.route,
            Route::Subsection {
                section: "basics".to_string(),
                subsection: "a".to_string(),
                tab: GuideTab::Shortcuts,
            }
        );
    }
}
