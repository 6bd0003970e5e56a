//! Not-found view.
//!
//! Terminal display state for a section id that is not in the catalog.
//! Never a crash; always offers a way back home.

use iced::Element;

use crate::component::EmptyState;
use crate::component::icon::icon_triangle_alert;
use crate::message::Message;

/// Render the not-found state for an unknown section id.
pub fn view_not_found<'a>(section: &str) -> Element<'a, Message> {
    EmptyState::new(icon_triangle_alert().size(44), "Section not found")
        .description(format!("\"{section}\" is not part of this guide."))
        .action("Go Home", Message::go_home())
        .view()
}
