//! Main application module for Guide Studio.
//!
//! Implements the Iced 0.14.0 application using the builder pattern. The
//! architecture follows the Elm pattern: State -> Message -> Update -> View.
//!
//! # Key Design Principles
//!
//! - **All state changes happen in `update()`** - views are pure functions
//! - **Feature handlers own their messages** - `update()` only dispatches
//! - **The store is written inside the mutators** - by the time a view
//!   renders, persisted state and in-memory state already agree

use iced::keyboard;
use iced::widget::{column, row};
use iced::{Element, Subscription, Task, Theme};

use crate::component::icon::section_icon;
use crate::component::{SidebarItem, sidebar, view_header};
use crate::constants::APP_NAME;
use crate::handler::{
    GuideHandler, MessageHandler, PreferencesHandler, keyboard as keyboard_handler, navigation,
};
use crate::message::Message;
use crate::state::{AppState, NavTarget, Route};
use crate::theme::{SIDEBAR_WIDTH, guide_theme, is_dark};
use crate::view::{view_home, view_not_found, view_overview, view_search, view_subsection};

// =============================================================================
// APPLICATION
// =============================================================================

/// Main application struct.
///
/// This is the root of the Iced application. It holds the application state
/// and implements the Elm architecture methods.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create a new application instance.
    ///
    /// Called once at startup: loads the embedded catalog, reads the two
    /// persisted documents (or synthesizes defaults), and synchronizes the
    /// dark-mode flag.
    pub fn new() -> (Self, Task<Message>) {
        (
            Self {
                state: AppState::new(),
            },
            Task::none(),
        )
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // =================================================================
            // Navigation
            // =================================================================
            Message::Navigate(target) => navigation::navigate(&mut self.state, target),

            // =================================================================
            // Feature messages
            // =================================================================
            Message::Guide(msg) => GuideHandler.handle(&mut self.state, msg),

            Message::Preferences(msg) => PreferencesHandler.handle(&mut self.state, msg),

            // =================================================================
            // Search
            // =================================================================
            Message::SearchInputChanged(query) => {
                self.state.search_input = query;
                Task::none()
            }

            Message::SearchSubmitted => {
                let query = self.state.search_input.trim().to_string();
                if query.is_empty() {
                    Task::none()
                } else {
                    navigation::navigate(&mut self.state, NavTarget::Search(query))
                }
            }

            // =================================================================
            // Global events
            // =================================================================
            Message::KeyPressed(key, modifiers) => {
                keyboard_handler::handle_key_press(&mut self.state, key, modifiers)
            }

            Message::OpenUrl(url) => {
                let _ = open::that(&url);
                Task::none()
            }

            Message::Noop => Task::none(),
        }
    }

    /// Render the view.
    ///
    /// This is a pure function that produces UI based on current state.
    pub fn view(&self) -> Element<'_, Message> {
        let content: Element<'_, Message> = match &self.state.route {
            Route::Home => view_home(&self.state),
            Route::Section { section } => view_overview(&self.state, section),
            Route::Subsection {
                section,
                subsection,
                tab,
            } => view_subsection(&self.state, section, subsection, *tab),
            Route::Search { query } => view_search(&self.state, query),
            Route::NotFound { section } => view_not_found(section),
        };

        let body: Element<'_, Message> = if self.state.prefs().sidebar_collapsed {
            content
        } else {
            row![self.section_sidebar(), content].into()
        };

        column![view_header(&self.state), body].into()
    }

    /// Section navigation sidebar with completion badges.
    fn section_sidebar(&self) -> Element<'_, Message> {
        let items: Vec<SidebarItem<Message>> = self
            .state
            .catalog
            .sections()
            .iter()
            .map(|section| {
                let mut item = SidebarItem::new(
                    section_icon(&section.icon),
                    section.title.clone(),
                    Message::go_section(section.id.clone()),
                );
                let total = section.subsections.len();
                if total > 0 {
                    let done = section
                        .subsections
                        .iter()
                        .filter(|s| self.state.progress.is_completed(&s.id))
                        .count();
                    item = item.with_badge(format!("{done}/{total}"));
                }
                item
            })
            .collect();

        let active = self
            .state
            .route
            .section_id()
            .and_then(|id| self.state.catalog.section_index(id));

        sidebar(items, active, SIDEBAR_WIDTH)
    }

    /// Get the window title for the current route.
    pub fn title(&self) -> String {
        match &self.state.route {
            Route::Home => APP_NAME.to_string(),
            Route::Section { section } => {
                let title = self
                    .state
                    .catalog
                    .section(section)
                    .map_or(section.as_str(), |s| s.title.as_str());
                format!("{title} - {APP_NAME}")
            }
            Route::Subsection {
                section,
                subsection,
                ..
            } => {
                let lesson = self
                    .state
                    .catalog
                    .subsection(section, subsection)
                    .map_or(subsection.as_str(), |s| s.title.as_str());
                format!("{lesson} - {APP_NAME}")
            }
            Route::Search { .. } => format!("Search - {APP_NAME}"),
            Route::NotFound { .. } => format!("Not Found - {APP_NAME}"),
        }
    }

    /// Get the theme from the app-wide dark flag.
    pub fn theme(&self) -> Theme {
        guide_theme(is_dark())
    }

    /// Subscribe to runtime events.
    pub fn subscription(&self) -> Subscription<Message> {
        keyboard::listen().map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Message::KeyPressed(key, modifiers)
            }
            _ => Message::Noop,
        })
    }
}
