//! Message handler architecture.
//!
//! This module provides a trait-based handler dispatch system that
//! separates message handling logic from the main App struct:
//!
//! - handlers grouped by feature
//! - handlers testable headlessly against an `AppState`
//! - clear ownership boundaries
//!
//! # Architecture
//!
//! Each handler implements [`MessageHandler`] for a specific message type,
//! and `App::update()` dispatches to the appropriate handler:
//!
//! ```ignore
//! pub fn update(&mut self, message: Message) -> Task<Message> {
//!     match message {
//!         Message::Guide(msg) => GuideHandler.handle(&mut self.state, msg),
//!         Message::Preferences(msg) => PreferencesHandler.handle(&mut self.state, msg),
//!         // ...
//!     }
//! }
//! ```
//!
//! Navigation is a set of free functions (`navigation::navigate`) because
//! several handlers need to trigger it as a follow-up.

mod guide;
pub mod keyboard;
pub mod navigation;
mod preferences;

use iced::Task;

use crate::message::Message;
use crate::state::AppState;

pub use guide::GuideHandler;
pub use preferences::PreferencesHandler;

/// Trait for handling messages in the Iced architecture.
///
/// # Type Parameters
///
/// * `M` - The message type this handler processes
pub trait MessageHandler<M> {
    /// Handle a message, potentially mutating state and returning a
    /// follow-up task.
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}
