//! Sidebar navigation component.
//!
//! A vertical sidebar listing guide sections with completion badges.

use iced::widget::{Text, button, column, container, row, scrollable, space, text};
use iced::{Alignment, Border, Element, Length, Theme};

use crate::theme::{BORDER_RADIUS_SM, GuideColors, SPACING_SM, SPACING_XS};

// =============================================================================
// SIDEBAR ITEM
// =============================================================================

/// A sidebar navigation item.
pub struct SidebarItem<M> {
    /// Leading icon
    pub icon: Text<'static>,
    /// Item label text
    pub label: String,
    /// Optional badge text (e.g. completed/total count)
    pub badge: Option<String>,
    /// Message to send when clicked
    pub message: M,
}

impl<M> SidebarItem<M> {
    /// Create a new sidebar item.
    pub fn new(icon: Text<'static>, label: impl Into<String>, message: M) -> Self {
        Self {
            icon,
            label: label.into(),
            badge: None,
            message,
        }
    }

    /// Add a badge to the item.
    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }
}

// =============================================================================
// SIDEBAR COMPONENT
// =============================================================================

/// Creates a vertical sidebar navigation.
///
/// Renders a column of navigation items with optional badges. Colors are
/// resolved inside style closures from the active theme.
pub fn sidebar<'a, M: Clone + 'a>(
    items: Vec<SidebarItem<M>>,
    active_index: Option<usize>,
    width: f32,
) -> Element<'a, M> {
    let mut item_column = column![].spacing(SPACING_XS);

    for (index, item) in items.into_iter().enumerate() {
        let is_active = active_index == Some(index);

        let mut content = row![
            item.icon.size(15),
            text(item.label).size(14).style(move |theme: &Theme| {
                let guide = theme.guide();
                text::Style {
                    color: Some(if is_active {
                        theme.extended_palette().primary.base.color
                    } else {
                        guide.text_secondary
                    }),
                }
            }),
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center);

        if let Some(badge) = item.badge {
            content = content.push(space::horizontal()).push(
                container(text(badge).size(11).style(|theme: &Theme| text::Style {
                    color: Some(theme.guide().text_secondary),
                }))
                .padding([2.0, 6.0])
                .style(|theme: &Theme| container::Style {
                    background: Some(theme.guide().surface_inset.into()),
                    border: Border {
                        radius: 10.0.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }),
            );
        }

        item_column = item_column.push(
            button(content)
                .width(Length::Fill)
                .padding([6.0, 10.0])
                .style(move |theme: &Theme, _status| button::Style {
                    background: if is_active {
                        Some(theme.guide().accent_soft.into())
                    } else {
                        None
                    },
                    text_color: theme.palette().text,
                    border: Border {
                        radius: BORDER_RADIUS_SM.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                })
                .on_press(item.message),
        );
    }

    container(scrollable(item_column.padding(SPACING_SM)))
        .width(width)
        .height(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.guide().surface.into()),
            border: Border {
                color: theme.guide().border,
                width: 1.0,
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}
