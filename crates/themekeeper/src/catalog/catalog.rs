//! The ordered set of themes a manager may select from.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::daisyui::{DAISYUI_DARK_THEMES, DAISYUI_THEMES};
use super::error::CatalogError;

static DAISYUI: Lazy<ThemeCatalog> = Lazy::new(|| {
    ThemeCatalog::from_validated(
        DAISYUI_THEMES.iter().map(|t| t.to_string()).collect(),
        DAISYUI_DARK_THEMES.iter().map(|t| t.to_string()).collect(),
    )
});

/// A fixed, ordered collection of unique theme identifiers.
///
/// A subset of the catalog is designated "dark"; [`ThemeCatalog::is_dark`]
/// answers membership in that subset. Catalogs never change after
/// construction.
///
/// # Example
///
/// ```rust
/// use themekeeper::ThemeCatalog;
///
/// let catalog = ThemeCatalog::new(["light", "dark", "forest"], ["dark", "forest"]).unwrap();
///
/// assert_eq!(catalog.themes(), ["light", "dark", "forest"]);
/// assert!(catalog.is_dark("forest"));
/// assert!(!catalog.is_dark("light"));
/// assert!(!catalog.contains("cupcake"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeCatalog {
    themes: Vec<String>,
    dark: Vec<String>,
    index: HashMap<String, usize>,
}

impl ThemeCatalog {
    /// Builds a catalog from themes in display order and the dark subset.
    ///
    /// # Errors
    ///
    /// Fails if `themes` is empty, contains a duplicate, or if a dark theme
    /// is not one of `themes`. Duplicates in `dark_themes` are collapsed.
    pub fn new<I, D, S, T>(themes: I, dark_themes: D) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        D: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        let themes: Vec<String> = themes.into_iter().map(Into::into).collect();
        if themes.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut index = HashMap::with_capacity(themes.len());
        for (pos, theme) in themes.iter().enumerate() {
            if index.insert(theme.clone(), pos).is_some() {
                return Err(CatalogError::Duplicate(theme.clone()));
            }
        }

        let mut dark: Vec<String> = Vec::new();
        for theme in dark_themes.into_iter().map(Into::into) {
            if !index.contains_key(&theme) {
                return Err(CatalogError::UnknownDarkTheme(theme));
            }
            if !dark.contains(&theme) {
                dark.push(theme);
            }
        }

        Ok(Self { themes, dark, index })
    }

    /// The 32 DaisyUI themes used by the coaching site, with its 11 dark themes.
    pub fn daisyui() -> Self {
        DAISYUI.clone()
    }

    fn from_validated(themes: Vec<String>, dark: Vec<String>) -> Self {
        let index = themes
            .iter()
            .enumerate()
            .map(|(pos, theme)| (theme.clone(), pos))
            .collect();
        Self { themes, dark, index }
    }

    /// Returns all themes in catalog order.
    pub fn themes(&self) -> &[String] {
        &self.themes
    }

    /// Returns the dark subset, in the order it was given.
    pub fn dark_themes(&self) -> &[String] {
        &self.dark
    }

    /// Returns true if `theme` is a member of the catalog.
    pub fn contains(&self, theme: &str) -> bool {
        self.index.contains_key(theme)
    }

    /// Returns true if `theme` is in the dark subset.
    ///
    /// Identifiers outside the catalog are never dark.
    pub fn is_dark(&self, theme: &str) -> bool {
        self.dark.iter().any(|t| t == theme)
    }

    /// Returns the catalog position of `theme`.
    pub fn position(&self, theme: &str) -> Option<usize> {
        self.index.get(theme).copied()
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Always false: empty catalogs cannot be built.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.themes.iter().map(String::as_str)
    }
}

impl Default for ThemeCatalog {
    fn default() -> Self {
        Self::daisyui()
    }
}
