//! Icon helpers using iced_fonts with Lucide icons.
//!
//! The content catalog references icons by their Lucide name (e.g.
//! `"git-branch"`); [`section_icon`] resolves those names, falling back to
//! a book for anything unknown. The named wrappers below cover the icons
//! the chrome itself uses.
//!
//! See <https://lucide.dev/icons/> for the full icon catalog.

use iced::widget::Text;
use iced_fonts::lucide;

/// Resolve a catalog icon name to its glyph.
///
/// Unknown names fall back to an open book rather than failing - icon
/// choice is editorial content, not part of the catalog contract.
pub fn section_icon(name: &str) -> Text<'static> {
    match name {
        "rocket" => lucide::rocket(),
        "git-branch" => lucide::git_branch(),
        "git-commit-horizontal" => lucide::git_commit_horizontal(),
        "users" => lucide::users(),
        "zap" => lucide::zap(),
        "keyboard" => lucide::keyboard(),
        "search" => lucide::search(),
        "lightbulb" => lucide::lightbulb(),
        _ => lucide::book_open(),
    }
}

// =============================================================================
// NAVIGATION & CHROME
// =============================================================================

/// Menu icon - sidebar toggle
pub fn icon_menu() -> Text<'static> {
    lucide::menu()
}

/// Search icon - header search box
pub fn icon_search() -> Text<'static> {
    lucide::search()
}

/// Search-x icon - empty search results
pub fn icon_search_x() -> Text<'static> {
    lucide::search_x()
}

/// Left arrow - previous lesson
pub fn icon_arrow_left() -> Text<'static> {
    lucide::arrow_left()
}

/// Right arrow - next lesson
pub fn icon_arrow_right() -> Text<'static> {
    lucide::arrow_right()
}

/// Alert triangle - not-found state
pub fn icon_triangle_alert() -> Text<'static> {
    lucide::triangle_alert()
}

// =============================================================================
// APPEARANCE
// =============================================================================

/// Sun icon - shown in dark mode, switches to light
pub fn icon_sun() -> Text<'static> {
    lucide::sun()
}

/// Moon icon - shown in light mode, switches to dark
pub fn icon_moon() -> Text<'static> {
    lucide::moon()
}

// =============================================================================
// PROGRESS & BOOKMARKS
// =============================================================================

/// Empty circle - lesson not completed
pub fn icon_circle() -> Text<'static> {
    lucide::circle()
}

/// Checked circle - lesson completed
pub fn icon_circle_check() -> Text<'static> {
    lucide::circle_check()
}

/// Bookmark outline - lesson not bookmarked
pub fn icon_bookmark() -> Text<'static> {
    lucide::bookmark()
}

/// Checked bookmark - lesson bookmarked
pub fn icon_bookmark_check() -> Text<'static> {
    lucide::bookmark_check()
}

// =============================================================================
// LESSON TABS
// =============================================================================

/// Lightbulb - tips tab
pub fn icon_lightbulb() -> Text<'static> {
    lucide::lightbulb()
}

/// Keyboard - shortcuts tab
pub fn icon_keyboard() -> Text<'static> {
    lucide::keyboard()
}

/// List - examples tab
pub fn icon_list() -> Text<'static> {
    lucide::list()
}
