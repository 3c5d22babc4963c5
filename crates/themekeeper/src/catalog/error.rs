//! Catalog construction errors.

/// Error returned when a catalog cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The catalog has no themes
    #[error("theme catalog is empty")]
    Empty,
    /// The same identifier appears more than once
    #[error("theme '{0}' appears more than once in the catalog")]
    Duplicate(String),
    /// A dark theme is not a member of the catalog
    #[error("dark theme '{0}' is not in the catalog")]
    UnknownDarkTheme(String),
}
