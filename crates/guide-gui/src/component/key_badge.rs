//! Keyboard-key badges.
//!
//! Renders a shortcut's key labels as a row of kbd-style chips.

use iced::widget::{container, row, text};
use iced::{Alignment, Border, Element, Theme};

use crate::theme::{BORDER_RADIUS_SM, GuideColors, SPACING_XS};

/// A single kbd-style chip for one key label.
pub fn key_badge<'a, M: 'a>(label: &str) -> Element<'a, M> {
    container(text(label.to_string()).size(12))
        .padding([2.0, 7.0])
        .style(|theme: &Theme| {
            let guide = theme.guide();
            container::Style {
                background: Some(guide.surface_inset.into()),
                border: Border {
                    color: guide.border,
                    width: 1.0,
                    radius: BORDER_RADIUS_SM.into(),
                },
                ..Default::default()
            }
        })
        .into()
}

/// A row of chips for a full key sequence, in press order.
pub fn key_sequence<'a, M: 'a>(keys: &[String]) -> Element<'a, M> {
    let mut chips = row![].spacing(SPACING_XS).align_y(Alignment::Center);
    for key in keys {
        chips = chips.push(key_badge(key));
    }
    chips.into()
}
