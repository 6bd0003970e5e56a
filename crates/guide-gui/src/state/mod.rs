//! Application state management.
//!
//! - **AppState**: root state (catalog + persisted singletons + route)
//! - **Route / NavTarget / GuideTab**: navigation state and requests
//! - **ShortcutFilter**: cached platform-filtered shortcut list

mod app_state;
mod derived;
mod navigation;

pub use app_state::AppState;
pub use derived::ShortcutFilter;
pub use navigation::{GuideTab, NavTarget, Route};
