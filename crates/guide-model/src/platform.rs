//! Operating-system platform types.
//!
//! Two enums cover the two roles platforms play in the catalog:
//!
//! - [`Platform`] - the user's selected operating system (a preference)
//! - [`ShortcutPlatform`] - the audience of a single keyboard shortcut,
//!   which additionally allows `all`

use serde::{Deserialize, Serialize};

// =============================================================================
// PLATFORM
// =============================================================================

/// An operating system a shortcut set can target.
///
/// Stored in user preferences and used to filter displayed shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Windows is the fallback when detection recognizes nothing.
    #[default]
    Windows,
    Mac,
    Linux,
}

impl Platform {
    /// Human-readable label for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Windows => "Windows",
            Self::Mac => "macOS",
            Self::Linux => "Linux",
        }
    }

    /// All platforms in picker order.
    pub const ALL: [Platform; 3] = [Self::Windows, Self::Mac, Self::Linux];
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Detect the platform from a raw environment hint.
///
/// The hint is matched case-insensitively for the substrings `mac` and
/// `linux`; anything else falls back to Windows. Kept as a pure function so
/// it can be tested with literal strings instead of a real environment.
pub fn detect_platform(raw: &str) -> Platform {
    let raw = raw.to_lowercase();
    if raw.contains("mac") {
        Platform::Mac
    } else if raw.contains("linux") {
        Platform::Linux
    } else {
        Platform::Windows
    }
}

// =============================================================================
// SHORTCUT PLATFORM
// =============================================================================

/// The audience of a single keyboard shortcut.
///
/// Catalog entries omit the field for shortcuts that apply everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShortcutPlatform {
    #[default]
    All,
    Windows,
    Mac,
    Linux,
}

impl ShortcutPlatform {
    /// Whether a shortcut with this audience is visible for `platform`.
    pub fn matches(&self, platform: Platform) -> bool {
        match self {
            Self::All => true,
            Self::Windows => platform == Platform::Windows,
            Self::Mac => platform == Platform::Mac,
            Self::Linux => platform == Platform::Linux,
        }
    }
}
