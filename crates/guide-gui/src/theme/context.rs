//! App-wide dark-mode flag.
//!
//! The visual theme is derived from this flag, not from the preferences
//! struct directly: `App::theme()` reads the flag, and the preferences
//! handler re-synchronizes it on load and after every mutation. That keeps
//! the theme consistent with the persisted `dark_mode` preference without
//! threading the preferences handle through the theme callback.

use std::cell::Cell;

thread_local! {
    /// Dark-mode flag for the UI thread.
    static DARK_MODE: Cell<bool> = const { Cell::new(false) };
}

/// Set the dark-mode flag.
///
/// Call this after loading preferences and after every preferences
/// mutation.
pub fn set_dark_mode(dark: bool) {
    DARK_MODE.with(|flag| flag.set(dark));
}

/// Whether the UI is currently in dark mode.
pub fn is_dark() -> bool {
    DARK_MODE.with(Cell::get)
}
