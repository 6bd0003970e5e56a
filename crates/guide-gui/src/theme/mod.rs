//! Theme module for Guide Studio.
//!
//! - Light/dark palettes and the [`GuideColors`] extension trait (`colors`)
//! - App-wide dark-mode flag (`context`) - kept in sync with the persisted
//!   preference on load and on every mutation
//! - Spacing constants (`spacing`)
//! - Typography sizes, scaled by the font-size preference (`typography`)

pub mod colors;
pub mod context;
pub mod spacing;
pub mod typography;

// Re-export the dark-flag context functions (main API)
pub use context::{is_dark, set_dark_mode};

// Re-export the color extension trait
pub use colors::{GuideColorSet, GuideColors};

// Re-export spacing constants (only those currently used)
pub use spacing::{
    BORDER_RADIUS_FULL, BORDER_RADIUS_MD, BORDER_RADIUS_SM, SIDEBAR_WIDTH, SPACING_LG, SPACING_MD,
    SPACING_SM, SPACING_XL, SPACING_XS,
};

pub use typography::scaled;

use iced::Theme;

/// Creates the application theme for the given appearance mode.
pub fn guide_theme(dark: bool) -> Theme {
    let name = if dark { "Guide Dark" } else { "Guide Light" };
    Theme::custom(name.to_string(), colors::palette(dark))
}
