//! Application header bar.
//!
//! Sidebar toggle, app identity, search box, operating-system selector,
//! font-size selector, and the dark-mode toggle. Preference controls
//! dispatch straight into the preference mutators.

use iced::widget::{button, column, container, pick_list, row, space, text, text_input};
use iced::{Alignment, Border, Element, Theme};

use guide_model::Platform;
use guide_store::FontSize;

use super::icon::{icon_menu, icon_moon, icon_sun};
use crate::constants::{APP_NAME, APP_TAGLINE};
use crate::message::{Message, PreferencesMessage};
use crate::state::AppState;
use crate::theme::{GuideColors, SPACING_MD, SPACING_SM};

/// Render the header bar.
pub fn view_header(state: &AppState) -> Element<'_, Message> {
    let prefs = state.prefs();

    let sidebar_toggle = button(icon_menu().size(16))
        .style(button::text)
        .on_press(Message::Preferences(PreferencesMessage::ToggleSidebar));

    let identity = button(
        column![
            text(APP_NAME).size(16),
            text(APP_TAGLINE)
                .size(11)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.guide().text_muted),
                }),
        ]
        .spacing(1.0),
    )
    .style(button::text)
    .on_press(Message::go_home());

    let search = text_input("Search guide...", &state.search_input)
        .size(13)
        .width(220.0)
        .on_input(Message::SearchInputChanged)
        .on_submit(Message::SearchSubmitted);

    let os_picker = pick_list(Platform::ALL, Some(prefs.operating_system), |os| {
        Message::Preferences(PreferencesMessage::SetOperatingSystem(os))
    })
    .text_size(13);

    let font_picker = pick_list(FontSize::ALL, Some(prefs.font_size), |size| {
        Message::Preferences(PreferencesMessage::SetFontSize(size))
    })
    .text_size(13);

    let dark_toggle = button(if prefs.dark_mode {
        icon_sun().size(16)
    } else {
        icon_moon().size(16)
    })
    .style(button::text)
    .on_press(Message::Preferences(PreferencesMessage::ToggleDarkMode));

    let bar = row![
        sidebar_toggle,
        identity,
        space::horizontal(),
        search,
        os_picker,
        font_picker,
        dark_toggle,
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center);

    container(bar)
        .padding([SPACING_SM, SPACING_MD])
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
