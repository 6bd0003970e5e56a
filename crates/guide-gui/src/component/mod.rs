//! Reusable UI components.
//!
//! Components are plain functions (or small builder structs) returning
//! `Element`s; they hold no state of their own.

pub mod empty_state;
pub mod header;
pub mod icon;
pub mod key_badge;
pub mod sidebar;

pub use empty_state::EmptyState;
pub use header::view_header;
pub use key_badge::key_sequence;
pub use sidebar::{SidebarItem, sidebar};
