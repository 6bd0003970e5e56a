//! Guide Studio - GUI library.
//!
//! Desktop guide browser: catalogued learning content rendered as navigable
//! pages, with per-user progress tracking and display preferences persisted
//! locally.
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message,
//! Update, View).

pub mod app;
pub mod component;
pub mod constants;
pub mod handler;
pub mod message;
pub mod state;
pub mod theme;
pub mod view;

#[cfg(test)]
pub(crate) mod test_support;

pub use app::App;
