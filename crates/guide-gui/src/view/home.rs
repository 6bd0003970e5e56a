//! Home view.
//!
//! Resume card for the most recently visited page, one card per guide
//! section with completion counts, and the list of bookmarked lessons.

use iced::widget::{button, column, row, scrollable, space, text};
use iced::{Alignment, Element, Length, Theme};

use crate::component::icon::{
    icon_arrow_right, icon_bookmark_check, icon_circle, icon_circle_check, section_icon,
};
use crate::constants::{APP_WEBSITE, copyright};
use crate::message::Message;
use crate::state::AppState;
use crate::theme::typography::{
    FONT_SIZE_BODY, FONT_SIZE_CAPTION, FONT_SIZE_HEADING, FONT_SIZE_SMALL, FONT_SIZE_SUBTITLE,
};
use crate::theme::{GuideColors, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS, scaled};

use super::card;

/// Render the home view.
pub fn view_home(state: &AppState) -> Element<'_, Message> {
    let font = state.prefs().font_size;

    let mut page = column![
        text("Welcome back").size(scaled(FONT_SIZE_HEADING, font)),
        text("Pick up where you left off, or browse the guide by section.")
            .size(scaled(FONT_SIZE_BODY, font))
            .style(|theme: &Theme| text::Style {
                color: Some(theme.guide().text_secondary),
            }),
    ]
    .spacing(SPACING_SM);

    if let Some(resume) = resume_card(state) {
        page = page.push(resume);
    }

    // Section cards
    let mut sections = column![].spacing(SPACING_SM);
    for section in state.catalog.sections() {
        let total = section.subsections.len();
        let done = section
            .subsections
            .iter()
            .filter(|s| state.progress.is_completed(&s.id))
            .count();

        let progress_label = if total > 0 {
            format!("{done}/{total} completed")
        } else {
            String::new()
        };

        let content = row![
            section_icon(&section.icon).size(22),
            column![
                text(section.title.clone()).size(scaled(FONT_SIZE_SUBTITLE, font)),
                text(section.description.clone())
                    .size(scaled(FONT_SIZE_SMALL, font))
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.guide().text_secondary),
                    }),
            ]
            .spacing(SPACING_XS)
            .width(Length::Fill),
            text(progress_label)
                .size(scaled(FONT_SIZE_SMALL, font))
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.guide().text_muted),
                }),
            icon_arrow_right().size(15),
        ]
        .spacing(SPACING_MD)
        .align_y(Alignment::Center);

        sections = sections.push(
            button(card(content))
                .style(button::text)
                .padding(0.0)
                .width(Length::Fill)
                .on_press(Message::go_section(section.id.clone())),
        );
    }

    page = page
        .push(text("Sections").size(scaled(FONT_SIZE_SUBTITLE, font)))
        .push(sections);

    if let Some(bookmarks) = bookmark_list(state) {
        page = page
            .push(text("Bookmarked lessons").size(scaled(FONT_SIZE_SUBTITLE, font)))
            .push(bookmarks);
    }

    // Footer
    page = page.push(
        row![
            text(copyright())
                .size(FONT_SIZE_CAPTION)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.guide().text_muted),
                }),
            space::horizontal(),
            button(text("Website").size(FONT_SIZE_CAPTION))
                .style(button::text)
                .on_press(Message::OpenUrl(APP_WEBSITE.to_string())),
        ]
        .align_y(Alignment::Center),
    );

    scrollable(page.spacing(SPACING_LG).padding(SPACING_LG))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// "Continue where you left off" card, when the last visited page still
/// exists in the catalog.
fn resume_card(state: &AppState) -> Option<Element<'_, Message>> {
    let font = state.prefs().font_size;
    let last = state.progress.last_visited()?;

    let (label, context, message) =
        if let Some((section, lesson)) = state.catalog.locate_subsection(last) {
            (
                lesson.title.clone(),
                section.title.clone(),
                Message::go_subsection(section.id.clone(), lesson.id.clone()),
            )
        } else {
            let section = state.catalog.section(last)?;
            (
                section.title.clone(),
                "Section".to_string(),
                Message::go_section(section.id.clone()),
            )
        };

    let content = row![
        column![
            text("Continue where you left off")
                .size(scaled(FONT_SIZE_SMALL, font))
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.guide().text_muted),
                }),
            text(label).size(scaled(FONT_SIZE_SUBTITLE, font)),
            text(context)
                .size(scaled(FONT_SIZE_SMALL, font))
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.guide().text_secondary),
                }),
        ]
        .spacing(SPACING_XS)
        .width(Length::Fill),
        button(text("Resume").size(scaled(FONT_SIZE_BODY, font)))
            .style(button::primary)
            .on_press(message),
    ]
    .spacing(SPACING_MD)
    .align_y(Alignment::Center);

    Some(card(content).into())
}

/// Bookmarked lessons in catalog order; `None` when there are none.
fn bookmark_list(state: &AppState) -> Option<Element<'_, Message>> {
    let font = state.prefs().font_size;
    let mut list = column![].spacing(SPACING_XS);
    let mut any = false;

    for section in state.catalog.sections() {
        for lesson in &section.subsections {
            if !state.progress.is_bookmarked(&lesson.id) {
                continue;
            }
            any = true;

            let completed = state.progress.is_completed(&lesson.id);
            let completion = if completed {
                icon_circle_check().size(15)
            } else {
                icon_circle().size(15)
            };

            list = list.push(
                button(
                    row![
                        icon_bookmark_check().size(14),
                        text(lesson.title.clone()).size(scaled(FONT_SIZE_BODY, font)),
                        text(section.title.clone())
                            .size(scaled(FONT_SIZE_SMALL, font))
                            .style(|theme: &Theme| text::Style {
                                color: Some(theme.guide().text_muted),
                            }),
                        space::horizontal(),
                        completion,
                    ]
                    .spacing(SPACING_SM)
                    .align_y(Alignment::Center),
                )
                .style(button::text)
                .width(Length::Fill)
                .on_press(Message::go_subsection(
                    section.id.clone(),
                    lesson.id.clone(),
                )),
            );
        }
    }

    any.then(|| card(list).into())
}
