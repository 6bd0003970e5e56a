//! View module for Guide Studio.
//!
//! Views are pure functions that render UI based on application state.
//!
//! ## Module Structure
//!
//! - `home.rs` - Home screen (resume card, section cards, bookmarks)
//! - `guide/` - Section overview and lesson pages
//! - `search.rs` - Free-text search results
//! - `not_found.rs` - Terminal state for unknown section ids

pub mod guide;
pub mod home;
pub mod not_found;
pub mod search;

pub use guide::{view_overview, view_subsection};
pub use home::view_home;
pub use not_found::view_not_found;
pub use search::view_search;

use iced::widget::{Container, container};
use iced::{Border, Element, Length, Theme};

use crate::message::Message;
use crate::theme::{BORDER_RADIUS_MD, GuideColors, SPACING_MD};

/// A bordered surface card, the basic grouping element of every page.
pub(crate) fn card<'a>(content: impl Into<Element<'a, Message>>) -> Container<'a, Message> {
    container(content)
        .padding(SPACING_MD)
        .width(Length::Fill)
        .style(|theme: &Theme| {
            let guide = theme.guide();
            container::Style {
                background: Some(guide.surface.into()),
                border: Border {
                    color: guide.border,
                    width: 1.0,
                    radius: BORDER_RADIUS_MD.into(),
                },
                ..Default::default()
            }
        })
}
