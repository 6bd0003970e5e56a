//! Color palettes and the theme extension trait.
//!
//! Iced's built-in `Palette` covers background/text/primary/success/
//! warning/danger; everything app-specific (surfaces, borders, muted text,
//! badges) lives in [`GuideColorSet`], resolved per appearance mode through
//! the [`GuideColors`] extension trait on `Theme`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::theme::GuideColors;
//!
//! container(content).style(|theme: &Theme| {
//!     let guide = theme.guide();
//!     container::Style {
//!         background: Some(guide.surface.into()),
//!         ..Default::default()
//!     }
//! })
//! ```

use iced::theme::Palette;
use iced::{Color, Theme};

/// Base palette for the given appearance mode.
pub fn palette(dark: bool) -> Palette {
    if dark {
        Palette {
            background: Color::from_rgb8(0x16, 0x18, 0x1d),
            text: Color::from_rgb8(0xe6, 0xe8, 0xee),
            primary: Color::from_rgb8(0x6c, 0x9e, 0xf8),
            success: Color::from_rgb8(0x4c, 0xb8, 0x7a),
            warning: Color::from_rgb8(0xd9, 0xa5, 0x3a),
            danger: Color::from_rgb8(0xe0, 0x5c, 0x5c),
        }
    } else {
        Palette {
            background: Color::from_rgb8(0xfa, 0xfa, 0xfc),
            text: Color::from_rgb8(0x1d, 0x21, 0x29),
            primary: Color::from_rgb8(0x2f, 0x6b, 0xe4),
            success: Color::from_rgb8(0x1f, 0x8a, 0x4c),
            warning: Color::from_rgb8(0xb3, 0x7e, 0x10),
            danger: Color::from_rgb8(0xc4, 0x3d, 0x3d),
        }
    }
}

// =============================================================================
// GUIDE COLOR SET
// =============================================================================

/// App-specific colors not covered by Iced's palette.
#[derive(Debug, Clone, Copy)]
pub struct GuideColorSet {
    // === Surfaces ===
    /// Cards and panels.
    pub surface: Color,
    /// Recessed areas: kbd chips, code-like blocks, badges.
    pub surface_inset: Color,

    // === Borders ===
    pub border: Color,

    // === Text ===
    /// Secondary text: descriptions, breadcrumbs.
    pub text_secondary: Color,
    /// Muted text: hints, captions, footers.
    pub text_muted: Color,
    /// Text on the primary accent color.
    pub text_on_accent: Color,

    // === Accents ===
    /// Light tint of the accent, for active/hover backgrounds.
    pub accent_soft: Color,
}

fn light_set() -> GuideColorSet {
    GuideColorSet {
        surface: Color::from_rgb8(0xff, 0xff, 0xff),
        surface_inset: Color::from_rgb8(0xef, 0xf1, 0xf5),
        border: Color::from_rgb8(0xdd, 0xe1, 0xe8),
        text_secondary: Color::from_rgb8(0x55, 0x5c, 0x68),
        text_muted: Color::from_rgb8(0x84, 0x8b, 0x98),
        text_on_accent: Color::from_rgb8(0xff, 0xff, 0xff),
        accent_soft: Color::from_rgb8(0xe3, 0xec, 0xfc),
    }
}

fn dark_set() -> GuideColorSet {
    GuideColorSet {
        surface: Color::from_rgb8(0x1e, 0x21, 0x28),
        surface_inset: Color::from_rgb8(0x2a, 0x2e, 0x37),
        border: Color::from_rgb8(0x34, 0x39, 0x44),
        text_secondary: Color::from_rgb8(0xa8, 0xae, 0xba),
        text_muted: Color::from_rgb8(0x79, 0x80, 0x8d),
        text_on_accent: Color::from_rgb8(0x10, 0x12, 0x16),
        accent_soft: Color::from_rgb8(0x23, 0x31, 0x4c),
    }
}

// =============================================================================
// EXTENSION TRAIT
// =============================================================================

/// Extension trait adding guide-specific colors to `Theme`.
pub trait GuideColors {
    /// Resolve the app-specific color set for this theme.
    fn guide(&self) -> GuideColorSet;
}

impl GuideColors for Theme {
    fn guide(&self) -> GuideColorSet {
        if self.extended_palette().is_dark {
            dark_set()
        } else {
            light_set()
        }
    }
}
