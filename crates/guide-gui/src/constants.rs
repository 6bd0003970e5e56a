//! Application identity constants.
//!
//! Centralized constants for application metadata used across the codebase.
//! This avoids magic strings scattered throughout the application.

/// Application display name.
pub const APP_NAME: &str = "Guide Studio";

/// Application identifier (reverse domain notation).
pub const APP_ID: &str = "com.guidestudio.app";

/// Application author.
pub const APP_AUTHOR: &str = "Guide Studio Contributors";

/// Application version from Cargo.toml.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application website URL.
pub const APP_WEBSITE: &str = "https://guidestudio.app/";

/// Application tagline shown under the title in the header.
pub const APP_TAGLINE: &str = "Learn the client, lesson by lesson";

/// Copyright notice.
pub fn copyright() -> String {
    let year = chrono::Utc::now().format("%Y");
    format!("Copyright {} {}", year, APP_AUTHOR)
}
