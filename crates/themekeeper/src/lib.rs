//! # Themekeeper
//!
//! Theme preference management for DaisyUI-style sites: a fixed catalog of
//! themes, one persisted selection, and the styling hook that applies it.
//!
//! ## Core concepts
//!
//! - [`ThemeCatalog`]: the ordered, immutable set of valid themes and its dark subset
//! - [`ThemeManager`]: owns the current selection, persists it and applies it
//! - [`Storage`]: durable key/value storage ([`MemoryStorage`], [`FileStorage`])
//! - [`Surface`]: the rendering environment the theme is written to ([`DocumentRoot`])
//! - [`Scheduler`]: runs the deferred reflow notification ([`ThreadScheduler`], [`Immediate`])
//! - [`ThemeConfig`]: YAML/JSON configuration
//!
//! ## Quick start
//!
//! ```rust
//! use themekeeper::{DocumentRoot, MemoryStorage, ThemeCatalog, ThemeManager};
//!
//! let root = DocumentRoot::new();
//! let mut themes = ThemeManager::initialize(
//!     ThemeCatalog::daisyui(),
//!     "light",
//!     "daisyui-theme",
//!     MemoryStorage::new(),
//!     root.clone(),
//! )
//! .unwrap();
//!
//! themes.toggle_theme();
//! assert_eq!(themes.current_theme(), "dark");
//! assert!(themes.is_dark_mode());
//!
//! // Unknown themes are ignored
//! themes.set_theme("not-a-theme");
//! assert_eq!(themes.current_theme(), "dark");
//! assert_eq!(root.theme().as_deref(), Some("dark"));
//! ```
//!
//! ## Restoring a preference
//!
//! A stored value is only honored if it is in the catalog; anything else
//! falls back to the default theme.
//!
//! ```rust
//! use themekeeper::{Immediate, MemoryStorage, ThemeCatalog, ThemeManager};
//!
//! let storage = MemoryStorage::with_entries([("daisyui-theme", "coffee")]);
//! let themes = ThemeManager::builder(ThemeCatalog::daisyui())
//!     .storage(storage)
//!     .scheduler(Immediate)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(themes.current_theme(), "coffee");
//! ```

pub mod catalog;
pub mod config;
mod error;
mod manager;
pub mod reflow;
pub mod storage;
pub mod surface;
pub mod system;

pub use catalog::{
    category, display_name, emoji, CatalogError, ThemeCatalog, ThemeCategory,
    DAISYUI_DARK_THEMES, DAISYUI_THEMES,
};
pub use config::{ConfigError, ThemeConfig, DEFAULT_STORAGE_KEY, DEFAULT_THEME};
pub use error::ThemeError;
pub use manager::{ThemeManager, ThemeManagerBuilder};
pub use reflow::{Immediate, Scheduler, ThreadScheduler, DEFAULT_REFLOW_DELAY};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
pub use surface::{ColorScheme, DocumentRoot, ReflowHook, Surface, THEME_ATTRIBUTE};
pub use system::{detect_color_mode, set_theme_detector, ColorMode};
