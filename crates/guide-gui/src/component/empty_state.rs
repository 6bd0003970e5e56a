//! Empty-state component.
//!
//! Standardized feedback for terminal display states: nothing to show, no
//! search results, or an unknown route.
//!
//! # Usage
//!
//! ```rust,ignore
//! EmptyState::new(icon_triangle_alert().size(44), "Section not found")
//!     .description("That section is not part of this guide.")
//!     .action("Go Home", Message::go_home())
//!     .view()
//! ```

use iced::widget::{button, column, container, text};
use iced::{Alignment, Element, Length, Theme};

use crate::theme::{GuideColors, SPACING_MD, SPACING_SM, SPACING_XL};

/// Empty state with icon, title, description, and optional action.
pub struct EmptyState<'a, M> {
    icon: Element<'a, M>,
    title: String,
    description: Option<String>,
    action: Option<(String, M)>,
}

impl<'a, M: Clone + 'a> EmptyState<'a, M> {
    /// Create a new empty state with icon and title.
    pub fn new(icon: impl Into<Element<'a, M>>, title: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            title: title.into(),
            description: None,
            action: None,
        }
    }

    /// Add a description below the title.
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Add an action button.
    pub fn action(mut self, label: impl Into<String>, message: M) -> Self {
        self.action = Some((label.into(), message));
        self
    }

    /// Build the element, centered in the available space.
    pub fn view(self) -> Element<'a, M> {
        let mut content = column![self.icon, text(self.title).size(18)]
            .spacing(SPACING_MD)
            .align_x(Alignment::Center);

        if let Some(desc) = self.description {
            content = content.push(text(desc).size(14).style(|theme: &Theme| text::Style {
                color: Some(theme.guide().text_secondary),
            }));
        }

        if let Some((label, message)) = self.action {
            content = content.push(
                button(text(label).size(14))
                    .style(button::primary)
                    .on_press(message),
            );
        }

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .padding(SPACING_XL)
            .into()
    }
}

/// Shorthand for a plain hint line used inside tab panels.
pub fn hint<'a, M: 'a>(message: impl Into<String>) -> Element<'a, M> {
    container(
        text(message.into())
            .size(13)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.guide().text_muted),
            }),
    )
    .padding(SPACING_SM)
    .into()
}
