//! Navigation: request resolution, canonical redirect, visit tracking.
//!
//! All route changes funnel through [`navigate`]. A request is resolved
//! against the catalog *before* the route is assigned, so the canonical
//! redirect (section -> first lesson) happens exactly once, replaces the
//! route instead of stacking anything, and cannot loop.

use iced::Task;

use guide_model::Catalog;

use crate::message::Message;
use crate::state::{AppState, GuideTab, NavTarget, Route};

/// Resolve a navigation request and apply it to the state.
pub fn navigate(state: &mut AppState, target: NavTarget) -> Task<Message> {
    let route = resolve(&state.catalog, target);

    // Track the most recently visited guide page: the lesson id, or the
    // section id for childless sections.
    match &route {
        Route::Subsection { subsection, .. } => state.progress.set_last_visited(subsection),
        Route::Section { section } => state.progress.set_last_visited(section),
        _ => {}
    }

    state.route = route;
    refresh_shortcut_filter(state);
    Task::none()
}

/// Resolve a request to the route that will actually be shown.
fn resolve(catalog: &Catalog, target: NavTarget) -> Route {
    match target {
        NavTarget::Home => Route::Home,

        NavTarget::Search(query) => Route::Search { query },

        NavTarget::Section(section) => match catalog.section(&section) {
            None => Route::NotFound { section },
            Some(found) => match found.first_subsection() {
                // Canonical redirect: an ambiguous parent route resolves
                // straight to its first lesson.
                Some(first) => Route::Subsection {
                    section,
                    subsection: first.id.clone(),
                    tab: GuideTab::default(),
                },
                None => Route::Section { section },
            },
        },

        NavTarget::Subsection {
            section,
            subsection,
        } => match catalog.section(&section) {
            None => Route::NotFound { section },
            Some(found) => {
                if found.subsection_index(&subsection).is_some() {
                    Route::Subsection {
                        section,
                        subsection,
                        tab: GuideTab::default(),
                    }
                } else {
                    // Unknown lesson under a known section falls back to the
                    // section overview rather than a not-found state.
                    Route::Section { section }
                }
            }
        },
    }
}

/// Rebuild the platform-filtered shortcut cache for the current route.
///
/// Called after every route change and after every operating-system change,
/// so the cache key always matches both inputs.
pub fn refresh_shortcut_filter(state: &mut AppState) {
    if let Route::Subsection {
        section,
        subsection,
        ..
    } = &state.route
        && let Some(lesson) = state.catalog.subsection(section, subsection)
    {
        let platform = state.preferences.get().operating_system;
        state.shortcut_filter.refresh(lesson, platform);
    } else {
        state.shortcut_filter.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{catalog, state_with};
    use guide_model::Platform;

    #[test]
    fn section_with_lessons_redirects_to_first_lesson() {
        let (_dir, mut state) = state_with(catalog());
        let _ = navigate(&mut state, NavTarget::Section("basics".to_string()));
        assert_eq!(
            state.route,
            Route::Subsection {
                section: "basics".to_string(),
                subsection: "a".to_string(),
                tab: GuideTab::Tips,
            }
        );
    }

    #[test]
    fn redirect_happens_once_and_does_not_loop() {
        let (_dir, mut state) = state_with(catalog());
        let _ = navigate(&mut state, NavTarget::Section("basics".to_string()));
        let after_first = state.route.clone();

        // Re-resolving the already-canonical route is a fixed point.
        let _ = navigate(&mut state, NavTarget::subsection("basics", "a"));
        assert_eq!(state.route, after_first);
    }

    #[test]
    fn childless_section_shows_its_overview() {
        let (_dir, mut state) = state_with(catalog());
        let _ = navigate(&mut state, NavTarget::Section("empty".to_string()));
        assert_eq!(
            state.route,
            Route::Section {
                section: "empty".to_string()
            }
        );
    }

    #[test]
    fn unknown_section_is_a_terminal_not_found() {
        let (_dir, mut state) = state_with(catalog());
        let _ = navigate(&mut state, NavTarget::Section("nope".to_string()));
        assert_eq!(
            state.route,
            Route::NotFound {
                section: "nope".to_string()
            }
        );
    }

    #[test]
    fn unknown_lesson_under_known_section_falls_back_to_overview() {
        let (_dir, mut state) = state_with(catalog());
        let _ = navigate(&mut state, NavTarget::subsection("basics", "nope"));
        assert_eq!(
            state.route,
            Route::Section {
                section: "basics".to_string()
            }
        );
    }

    #[test]
    fn guide_navigation_records_last_visited() {
        let (_dir, mut state) = state_with(catalog());

        let _ = navigate(&mut state, NavTarget::subsection("basics", "b"));
        assert_eq!(state.progress.last_visited(), Some("b"));

        // Canonical redirect records the lesson actually landed on.
        let _ = navigate(&mut state, NavTarget::Section("basics".to_string()));
        assert_eq!(state.progress.last_visited(), Some("a"));

        // Childless sections record the section id itself.
        let _ = navigate(&mut state, NavTarget::Section("empty".to_string()));
        assert_eq!(state.progress.last_visited(), Some("empty"));

        // Home and not-found do not touch it.
        let _ = navigate(&mut state, NavTarget::Home);
        assert_eq!(state.progress.last_visited(), Some("empty"));
    }

    #[test]
    fn shortcut_filter_follows_navigation() {
        let (_dir, mut state) = state_with(catalog());
        state.preferences.set_operating_system(Platform::Mac);

        let _ = navigate(&mut state, NavTarget::subsection("basics", "a"));
        // The test catalog gives lesson "a" one all-platform and one
        // windows-only shortcut.
        assert_eq!(state.shortcut_filter.shortcuts().len(), 1);

        let _ = navigate(&mut state, NavTarget::Home);
        assert!(state.shortcut_filter.shortcuts().is_empty());
    }
}
