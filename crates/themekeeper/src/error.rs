//! Crate-level errors.

use crate::catalog::CatalogError;
use crate::config::ConfigError;

/// Error returned when a [`ThemeManager`](crate::ThemeManager) cannot be built.
///
/// Once built, a manager never fails: invalid theme requests are ignored and
/// storage failures are logged and absorbed.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// The configured default theme is not in the catalog
    #[error("default theme '{0}' is not in the catalog")]
    UnknownDefault(String),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
