//! Embedded guide content.
//!
//! The built-in catalog is included at compile time, which eliminates
//! runtime file I/O and path resolution issues. Editorial content lives in
//! `data/guide/content.json`; this module only parses and validates it.

use crate::catalog::{Catalog, CatalogError};
use crate::section::Section;

/// The built-in guide catalog, as shipped.
pub const GUIDE_CONTENT: &str = include_str!("../data/guide/content.json");

/// Parse and validate the built-in catalog.
pub fn load_builtin() -> Result<Catalog, CatalogError> {
    let sections: Vec<Section> = serde_json::from_str(GUIDE_CONTENT)?;
    let catalog = Catalog::new(sections);
    catalog.validate()?;
    Ok(catalog)
}
