//! Search results view.
//!
//! Renders the hits for the free-text query forwarded from the header
//! search box. Hits navigate to their section or lesson.

use iced::widget::{button, column, row, scrollable, text};
use iced::{Alignment, Element, Length, Theme};

use crate::component::EmptyState;
use crate::component::icon::{icon_arrow_right, icon_search, icon_search_x, section_icon};
use crate::message::Message;
use crate::state::AppState;
use crate::theme::typography::{FONT_SIZE_BODY, FONT_SIZE_HEADING, FONT_SIZE_SMALL};
use crate::theme::{GuideColors, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS, scaled};

use super::card;

/// Render search results for `query`.
pub fn view_search<'a>(state: &'a AppState, query: &str) -> Element<'a, Message> {
    let font = state.prefs().font_size;
    let hits = state.catalog.search(query);

    if hits.is_empty() {
        return EmptyState::new(icon_search_x().size(44), "No results")
            .description(format!("Nothing in the guide matches \"{query}\"."))
            .action("Go Home", Message::go_home())
            .view();
    }

    let mut list = column![].spacing(SPACING_SM);
    for hit in &hits {
        let (title, context, message) = match hit.subsection {
            Some(lesson) => (
                lesson.title.clone(),
                hit.section.title.clone(),
                Message::go_subsection(hit.section.id.clone(), lesson.id.clone()),
            ),
            None => (
                hit.section.title.clone(),
                hit.section.description.clone(),
                Message::go_section(hit.section.id.clone()),
            ),
        };

        let content = row![
            section_icon(&hit.section.icon).size(18),
            column![
                text(title).size(scaled(FONT_SIZE_BODY, font)),
                text(context)
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

        list = list.push(
            button(card(content))
                .style(button::text)
                .padding(0.0)
                .width(Length::Fill)
                .on_press(message),
        );
    }

    let page = column![
        row![
            icon_search().size(20),
            text(format!("Search results for \"{query}\"")).size(scaled(FONT_SIZE_HEADING, font)),
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center),
        text(format!(
            "{} match{}",
            hits.len(),
            if hits.len() == 1 { "" } else { "es" }
        ))
        .size(scaled(FONT_SIZE_SMALL, font))
        .style(|theme: &Theme| text::Style {
            color: Some(theme.guide().text_secondary),
        }),
        list,
    ]
    .spacing(SPACING_LG)
    .padding(SPACING_LG);

    scrollable(page).width(Length::Fill).height(Length::Fill).into()
}
