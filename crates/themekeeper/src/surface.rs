//! The rendering environment a theme is applied to.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Attribute on the document root that carries the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Called by the deferred reflow task once a theme has been applied.
pub type ReflowHook = Arc<dyn Fn() + Send + Sync>;

/// Color-scheme hint written next to the theme attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    /// The hint for `theme`. Only the literal `"dark"` theme maps to
    /// [`ColorScheme::Dark`]; other dark-subset themes stay light.
    pub fn for_theme(theme: &str) -> Self {
        if theme == "dark" {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }
}

/// Receives the styling written by the manager.
pub trait Surface: Send {
    /// Replaces the theme attribute on the root element.
    fn set_theme_attribute(&mut self, theme: &str);

    /// Sets the root color-scheme hint.
    fn set_color_scheme(&mut self, scheme: ColorScheme);

    /// Returns the callback that forces the environment to recompute layout,
    /// if it needs one after a style change.
    fn reflow_hook(&self) -> Option<ReflowHook> {
        None
    }
}

#[derive(Debug, Default)]
struct RootState {
    attributes: BTreeMap<String, String>,
    color_scheme: Option<ColorScheme>,
    reflows: usize,
}

/// An in-memory document root.
///
/// Clones share state: hand one clone to the manager and keep another to
/// observe what was applied.
///
/// # Example
///
/// ```rust
/// use themekeeper::{ColorScheme, DocumentRoot, Surface};
///
/// let root = DocumentRoot::new();
/// let mut handle = root.clone();
/// handle.set_theme_attribute("dark");
/// handle.set_color_scheme(ColorScheme::Dark);
///
/// assert_eq!(root.theme().as_deref(), Some("dark"));
/// assert_eq!(root.color_scheme(), Some(ColorScheme::Dark));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DocumentRoot {
    state: Arc<RwLock<RootState>>,
}

impl DocumentRoot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current value of [`THEME_ATTRIBUTE`].
    pub fn theme(&self) -> Option<String> {
        self.attribute(THEME_ATTRIBUTE)
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.read(|state| state.attributes.get(name).cloned())
    }

    pub fn color_scheme(&self) -> Option<ColorScheme> {
        self.read(|state| state.color_scheme)
    }

    /// Number of reflow notifications delivered so far.
    pub fn reflow_count(&self) -> usize {
        self.read(|state| state.reflows)
    }

    fn read<T>(&self, f: impl FnOnce(&RootState) -> T) -> T {
        f(&self.state.read().unwrap_or_else(PoisonError::into_inner))
    }

    fn write<T>(&self, f: impl FnOnce(&mut RootState) -> T) -> T {
        f(&mut self.state.write().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Surface for DocumentRoot {
    fn set_theme_attribute(&mut self, theme: &str) {
        self.write(|state| {
            state.attributes.remove(THEME_ATTRIBUTE);
            state
                .attributes
                .insert(THEME_ATTRIBUTE.to_string(), theme.to_string());
        });
    }

    fn set_color_scheme(&mut self, scheme: ColorScheme) {
        self.write(|state| state.color_scheme = Some(scheme));
    }

    fn reflow_hook(&self) -> Option<ReflowHook> {
        let state = Arc::clone(&self.state);
        Some(Arc::new(move || {
            state.write().unwrap_or_else(PoisonError::into_inner).reflows += 1;
        }))
    }
}
