//! Theme catalogs and per-theme metadata.
//!
//! This module provides:
//!
//! - [`ThemeCatalog`]: The fixed, ordered set of valid theme identifiers plus its dark subset
//! - [`CatalogError`]: Errors from building a catalog
//! - [`ThemeCategory`]: Picker groupings for the DaisyUI themes
//! - [`display_name`] / [`emoji`]: Labels used when listing themes
//!
//! A catalog is immutable once built. Every theme the manager ever holds is a
//! member of its catalog.

#[allow(clippy::module_inception)]
mod catalog;
mod daisyui;
mod error;

pub use catalog::ThemeCatalog;
pub use daisyui::{category, display_name, emoji, ThemeCategory, DAISYUI_DARK_THEMES, DAISYUI_THEMES};
pub use error::CatalogError;
