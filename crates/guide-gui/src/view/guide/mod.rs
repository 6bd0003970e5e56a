//! Guide pages: section overview and lesson view.

mod overview;
mod subsection;

pub use overview::view_overview;
pub use subsection::view_subsection;

use iced::widget::{button, row, text};
use iced::{Alignment, Element, Theme};

use crate::message::Message;
use crate::theme::typography::FONT_SIZE_SMALL;
use crate::theme::{GuideColors, SPACING_XS};

/// A breadcrumb trail; entries with a message render as links, the final
/// entry renders as plain text.
pub(crate) fn breadcrumb<'a>(
    entries: Vec<(String, Option<Message>)>,
) -> Element<'a, Message> {
    let mut trail = row![].spacing(SPACING_XS).align_y(Alignment::Center);
    let last = entries.len().saturating_sub(1);

    for (index, (label, message)) in entries.into_iter().enumerate() {
        match message {
            Some(message) => {
                trail = trail.push(
                    button(text(label).size(FONT_SIZE_SMALL).style(
                        |theme: &Theme| text::Style {
                            color: Some(theme.guide().text_secondary),
                        },
                    ))
                    .style(button::text)
                    .padding([0.0, 2.0])
                    .on_press(message),
                );
            }
            None => {
                trail = trail.push(text(label).size(FONT_SIZE_SMALL));
            }
        }
        if index != last {
            trail = trail.push(text("/").size(FONT_SIZE_SMALL).style(
                |theme: &Theme| text::Style {
                    color: Some(theme.guide().text_muted),
                },
            ));
        }
    }

    trail.into()
}
