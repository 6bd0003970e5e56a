//! Lesson page.
//!
//! Breadcrumb, title with bookmark and completion actions, lesson body, the
//! Tips/Shortcuts/Examples tab strip, and prev/next traversal buttons.

use iced::widget::{Space, button, column, container, row, scrollable, space, text};
use iced::{Alignment, Border, Element, Length, Theme};

use guide_model::{Example, NextTarget, Subsection};

use crate::component::empty_state::hint;
use crate::component::icon::{
    icon_arrow_left, icon_arrow_right, icon_bookmark, icon_bookmark_check, icon_circle,
    icon_circle_check, icon_keyboard, icon_lightbulb, icon_list,
};
use crate::component::key_sequence;
use crate::message::{GuideMessage, Message};
use crate::state::{AppState, GuideTab};
use crate::theme::typography::{
    FONT_SIZE_BODY, FONT_SIZE_HEADING, FONT_SIZE_SMALL, FONT_SIZE_SUBTITLE,
};
use crate::theme::{
    BORDER_RADIUS_SM, GuideColors, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS, scaled,
};

use super::breadcrumb;
use crate::view::{card, not_found::view_not_found};

/// Render a lesson page.
pub fn view_subsection<'a>(
    state: &'a AppState,
    section_id: &str,
    subsection_id: &str,
    tab: GuideTab,
) -> Element<'a, Message> {
    let Some(section) = state.catalog.section(section_id) else {
        return view_not_found(section_id);
    };
    let Some(lesson) = state.catalog.subsection(section_id, subsection_id) else {
        return view_not_found(section_id);
    };
    let font = state.prefs().font_size;

    let crumbs = breadcrumb(vec![
        ("Home".to_string(), Some(Message::go_home())),
        (
            section.title.clone(),
            Some(Message::go_section(section.id.clone())),
        ),
        (lesson.title.clone(), None),
    ]);

    // Title row with bookmark and completion actions
    let bookmarked = state.progress.is_bookmarked(&lesson.id);
    let bookmark_button = button(if bookmarked {
        icon_bookmark_check().size(16)
    } else {
        icon_bookmark().size(16)
    })
    .style(if bookmarked {
        button::primary
    } else {
        button::secondary
    })
    .on_press(Message::Guide(GuideMessage::ToggleBookmark(
        lesson.id.clone(),
    )));

    let completed = state.progress.is_completed(&lesson.id);
    let complete_button = if completed {
        button(
            row![icon_circle_check().size(15), text("Completed").size(14)]
                .spacing(SPACING_XS)
                .align_y(Alignment::Center),
        )
        .style(button::success)
        .on_press(Message::Guide(GuideMessage::MarkIncomplete(
            lesson.id.clone(),
        )))
    } else {
        button(
            row![icon_circle().size(15), text("Mark Complete").size(14)]
                .spacing(SPACING_XS)
                .align_y(Alignment::Center),
        )
        .style(button::primary)
        .on_press(Message::Guide(GuideMessage::MarkComplete(
            lesson.id.clone(),
        )))
    };

    let title_row = row![
        column![
            text(lesson.title.clone()).size(scaled(FONT_SIZE_HEADING, font)),
            text(section.title.clone())
                .size(scaled(FONT_SIZE_SMALL, font))
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.guide().text_secondary),
                }),
        ]
        .spacing(SPACING_XS)
        .width(Length::Fill),
        bookmark_button,
        complete_button,
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center);

    let body = card(text(lesson.content.clone()).size(scaled(FONT_SIZE_BODY, font)));

    let page = column![
        crumbs,
        title_row,
        body,
        tab_strip(state, lesson, tab),
        tab_content(state, lesson, tab),
        traversal_row(state, section_id, subsection_id),
    ]
    .spacing(SPACING_LG)
    .padding(SPACING_LG);

    scrollable(page).width(Length::Fill).height(Length::Fill).into()
}

// =============================================================================
// TABS
// =============================================================================

/// The Tips/Shortcuts/Examples tab strip; empty tabs are disabled.
fn tab_strip<'a>(
    state: &'a AppState,
    lesson: &'a Subsection,
    active: GuideTab,
) -> Element<'a, Message> {
    let mut strip = row![].spacing(SPACING_XS);

    for tab in GuideTab::all() {
        let (icon, available) = match tab {
            GuideTab::Tips => (icon_lightbulb(), !lesson.tips.is_empty()),
            GuideTab::Shortcuts => (
                icon_keyboard(),
                !state.shortcut_filter.shortcuts().is_empty(),
            ),
            GuideTab::Examples => (icon_list(), !lesson.examples.is_empty()),
        };

        let label = row![icon.size(13), text(tab.name()).size(13)]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center);

        strip = strip.push(
            button(label)
                .style(if *tab == active {
                    button::primary
                } else {
                    button::text
                })
                .on_press_maybe(
                    available.then_some(Message::Guide(GuideMessage::SelectTab(*tab))),
                ),
        );
    }

    strip.into()
}

/// Content of the active tab.
fn tab_content<'a>(
    state: &'a AppState,
    lesson: &'a Subsection,
    tab: GuideTab,
) -> Element<'a, Message> {
    match tab {
        GuideTab::Tips => tips_panel(state, lesson),
        GuideTab::Shortcuts => shortcuts_panel(state),
        GuideTab::Examples => examples_panel(state, lesson),
    }
}

fn tips_panel<'a>(state: &'a AppState, lesson: &'a Subsection) -> Element<'a, Message> {
    let font = state.prefs().font_size;
    if lesson.tips.is_empty() {
        return hint("No tips for this lesson.");
    }

    let mut list = column![
        text("Pro Tips").size(scaled(FONT_SIZE_SUBTITLE, font)),
        text("Best practices and helpful hints")
            .size(scaled(FONT_SIZE_SMALL, font))
            .style(|theme: &Theme| text::Style {
                color: Some(theme.guide().text_secondary),
            }),
    ]
    .spacing(SPACING_SM);

    for tip in &lesson.tips {
        list = list.push(
            row![
                icon_lightbulb().size(14),
                text(tip.clone()).size(scaled(FONT_SIZE_BODY, font)),
            ]
            .spacing(SPACING_SM)
            .align_y(Alignment::Start),
        );
    }

    card(list).into()
}

fn shortcuts_panel(state: &AppState) -> Element<'_, Message> {
    let font = state.prefs().font_size;
    let shortcuts = state.shortcut_filter.shortcuts();
    if shortcuts.is_empty() {
        return hint("No shortcuts for the selected operating system.");
    }

    let os = state.prefs().operating_system;
    let mut list = column![
        text("Keyboard Shortcuts").size(scaled(FONT_SIZE_SUBTITLE, font)),
        text(format!(
            "Speed up your workflow - showing shortcuts for {}",
            os.label()
        ))
        .size(scaled(FONT_SIZE_SMALL, font))
        .style(|theme: &Theme| text::Style {
            color: Some(theme.guide().text_secondary),
        }),
    ]
    .spacing(SPACING_SM);

    for shortcut in shortcuts {
        list = list.push(
            container(
                row![
                    text(shortcut.description.clone()).size(scaled(FONT_SIZE_BODY, font)),
                    space::horizontal(),
                    key_sequence(&shortcut.keys),
                ]
                .align_y(Alignment::Center),
            )
            .padding([SPACING_XS, SPACING_SM])
            .width(Length::Fill)
            .style(|theme: &Theme| container::Style {
                background: Some(theme.guide().surface_inset.into()),
                border: Border {
                    radius: BORDER_RADIUS_SM.into(),
                    ..Default::default()
                },
                ..Default::default()
            }),
        );
    }

    card(list).into()
}

fn examples_panel<'a>(state: &'a AppState, lesson: &'a Subsection) -> Element<'a, Message> {
    let font = state.prefs().font_size;
    if lesson.examples.is_empty() {
        return hint("No examples for this lesson.");
    }

    let mut stack = column![].spacing(SPACING_SM);
    for example in &lesson.examples {
        stack = stack.push(example_card(example, font));
    }
    stack.into()
}

fn example_card(example: &Example, font: guide_store::FontSize) -> Element<'_, Message> {
    let mut content = column![
        text(example.title.clone()).size(scaled(FONT_SIZE_SUBTITLE, font)),
        text(example.description.clone())
            .size(scaled(FONT_SIZE_SMALL, font))
            .style(|theme: &Theme| text::Style {
                color: Some(theme.guide().text_secondary),
            }),
    ]
    .spacing(SPACING_SM);

    for (index, step) in example.steps.iter().enumerate() {
        content = content.push(
            row![
                text(format!("{}.", index + 1))
                    .size(scaled(FONT_SIZE_SMALL, font))
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.guide().text_muted),
                    }),
                text(step.clone()).size(scaled(FONT_SIZE_BODY, font)),
            ]
            .spacing(SPACING_SM),
        );
    }

    card(content).into()
}

// =============================================================================
// TRAVERSAL
// =============================================================================

/// Prev/next navigation row at the bottom of the lesson.
fn traversal_row<'a>(
    state: &'a AppState,
    section_id: &str,
    subsection_id: &str,
) -> Element<'a, Message> {
    let font = state.prefs().font_size;

    let prev: Element<'_, Message> =
        match state.catalog.prev_in_section(section_id, subsection_id) {
            Some(prev) => button(
                row![
                    icon_arrow_left().size(14),
                    text(prev.title.clone()).size(scaled(FONT_SIZE_BODY, font)),
                ]
                .spacing(SPACING_XS)
                .align_y(Alignment::Center),
            )
            .style(button::secondary)
            .on_press(Message::go_subsection(
                section_id.to_string(),
                prev.id.clone(),
            ))
            .into(),
            None => Space::new().into(),
        };

    let next: Element<'_, Message> = match state.catalog.next_target(section_id, subsection_id) {
        Some(NextTarget::Subsection {
            section,
            subsection,
        }) => {
            let title = state
                .catalog
                .subsection(&section, &subsection)
                .map(|s| s.title.clone())
                .unwrap_or_else(|| subsection.clone());
            next_button(title, font, Message::go_subsection(section, subsection))
        }
        Some(NextTarget::Section { section }) => {
            let title = state
                .catalog
                .section(&section)
                .map(|s| s.title.clone())
                .unwrap_or_else(|| section.clone());
            next_button(title, font, Message::go_section(section))
        }
        Some(NextTarget::EndOfCatalog) | None => {
            next_button("Back to Home".to_string(), font, Message::go_home())
        }
    };

    row![prev, space::horizontal(), next].into()
}

fn next_button<'a>(
    label: String,
    font: guide_store::FontSize,
    message: Message,
) -> Element<'a, Message> {
    button(
        row![
            text(label).size(scaled(FONT_SIZE_BODY, font)),
            icon_arrow_right().size(14),
        ]
        .spacing(SPACING_XS)
        .align_y(Alignment::Center),
    )
    .style(button::primary)
    .on_press(message)
    .into()
}
