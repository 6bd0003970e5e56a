//! Content catalog for Guide Studio.
//!
//! This crate defines the read-only guide content model and everything that
//! can be computed from it without touching user state:
//!
//! - **Types** - [`Section`], [`Subsection`], [`Shortcut`], [`Example`]
//! - **Platforms** - [`Platform`], [`ShortcutPlatform`], [`detect_platform`]
//! - **Catalog** - lookup, ordering, prev/next traversal, free-text search
//! - **Embedded content** - the built-in guide, included at compile time
//!
//! The catalog is immutable at runtime. Progress and preferences live in the
//! `guide-store` crate; rendering lives in `guide-gui`.

mod catalog;
mod embedded;
mod platform;
mod section;

pub use catalog::{Catalog, CatalogError, NextTarget, SearchHit};
pub use embedded::{GUIDE_CONTENT, load_builtin};
pub use platform::{Platform, ShortcutPlatform, detect_platform};
pub use section::{Example, Section, Shortcut, Subsection};
