//! Section overview page.
//!
//! Shown for sections without lessons, and as the fallback when a lesson id
//! under a known section does not resolve. Lists the section's lessons with
//! completion indicators.

use iced::widget::{button, column, row, scrollable, text};
use iced::{Alignment, Element, Length, Theme};

use crate::component::empty_state::hint;
use crate::component::icon::{icon_arrow_right, icon_circle, icon_circle_check};
use crate::message::Message;
use crate::state::AppState;
use crate::theme::typography::{
    FONT_SIZE_BODY, FONT_SIZE_HEADING, FONT_SIZE_SMALL, FONT_SIZE_SUBTITLE,
};
use crate::theme::{GuideColors, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS, scaled};

use super::breadcrumb;
use crate::view::{card, not_found::view_not_found};

/// Render a section overview.
pub fn view_overview<'a>(state: &'a AppState, section_id: &str) -> Element<'a, Message> {
    let Some(section) = state.catalog.section(section_id) else {
        return view_not_found(section_id);
    };
    let font = state.prefs().font_size;

    let crumbs = breadcrumb(vec![
        ("Home".to_string(), Some(Message::go_home())),
        (section.title.clone(), None),
    ]);

    let mut page = column![
        crumbs,
        text(section.title.clone()).size(scaled(FONT_SIZE_HEADING, font)),
        text(section.description.clone())
            .size(scaled(FONT_SIZE_SUBTITLE, font))
            .style(|theme: &Theme| text::Style {
                color: Some(theme.guide().text_secondary),
            }),
    ]
    .spacing(SPACING_SM);

    if section.subsections.is_empty() {
        page = page.push(hint("This section has no lessons yet."));
    } else {
        let mut lessons = column![].spacing(SPACING_SM);
        for lesson in &section.subsections {
            let completed = state.progress.is_completed(&lesson.id);
            let completion = if completed {
                icon_circle_check().size(18)
            } else {
                icon_circle().size(18)
            };

            let content = row![
                completion,
                column![
                    text(lesson.title.clone()).size(scaled(FONT_SIZE_BODY, font)),
                    text(preview(&lesson.content))
                        .size(scaled(FONT_SIZE_SMALL, font))
                        .style(|theme: &Theme| text::Style {
                            color: Some(theme.guide().text_secondary),
                        }),
                ]
                .spacing(SPACING_XS)
                .width(Length::Fill),
                icon_arrow_right().size(15),
            ]
            .spacing(SPACING_MD)
            .align_y(Alignment::Center);

            lessons = lessons.push(
                button(card(content))
                    .style(button::text)
                    .padding(0.0)
                    .width(Length::Fill)
                    .on_press(Message::go_subsection(
                        section.id.clone(),
                        lesson.id.clone(),
                    )),
            );
        }

        page = page
            .push(text("Lessons").size(scaled(FONT_SIZE_SUBTITLE, font)))
            .push(lessons);
    }

    scrollable(page.spacing(SPACING_LG).padding(SPACING_LG))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// First ~150 characters of the lesson body, on a char boundary.
fn preview(content: &str) -> String {
    const LIMIT: usize = 150;
    if content.chars().count() <= LIMIT {
        content.to_string()
    } else {
        let cut: String = content.chars().take(LIMIT).collect();
        format!("{}...", cut.trim_end())
    }
}
