//! The theme preference manager.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::catalog::ThemeCatalog;
use crate::config::{ThemeConfig, DEFAULT_STORAGE_KEY, DEFAULT_THEME};
use crate::error::ThemeError;
use crate::reflow::{Scheduler, ThreadScheduler, DEFAULT_REFLOW_DELAY};
use crate::storage::{MemoryStorage, Storage};
use crate::surface::{ColorScheme, DocumentRoot, Surface};
use crate::system::detect_color_mode;

type Listener = Box<dyn Fn(&str) + Send>;

/// Single source of truth for the active theme.
///
/// The manager owns the current selection, keeps it inside its catalog,
/// persists it under one storage key and writes it to a [`Surface`].
///
/// Once built it never fails:
///
/// - unknown themes passed to [`set_theme`](Self::set_theme) are ignored
/// - a missing, unknown or unreadable stored value falls back to the default
/// - storage write failures are logged and the in-memory selection stays
///   authoritative for the session
///
/// # Example
///
/// ```rust
/// use themekeeper::{DocumentRoot, Immediate, MemoryStorage, Storage, ThemeCatalog, ThemeManager};
///
/// let catalog = ThemeCatalog::new(["light", "dark", "forest"], ["dark", "forest"]).unwrap();
/// let storage = MemoryStorage::new();
/// let root = DocumentRoot::new();
///
/// let mut themes = ThemeManager::builder(catalog)
///     .default_theme("light")
///     .storage_key("theme-preference")
///     .storage(storage.clone())
///     .surface(root.clone())
///     .scheduler(Immediate)
///     .build()
///     .unwrap();
///
/// assert_eq!(themes.current_theme(), "light");
///
/// themes.set_theme("forest");
/// assert!(themes.is_dark_mode());
/// assert_eq!(root.theme().as_deref(), Some("forest"));
/// assert_eq!(storage.get("theme-preference").unwrap().as_deref(), Some("forest"));
/// ```
pub struct ThemeManager {
    catalog: ThemeCatalog,
    current: String,
    storage_key: String,
    storage: Box<dyn Storage>,
    surface: Box<dyn Surface>,
    scheduler: Arc<dyn Scheduler>,
    reflow_delay: Duration,
    listeners: Vec<Listener>,
}

impl ThemeManager {
    /// Builds a manager over `catalog`, restoring the stored selection.
    ///
    /// Reflow notifications run on a background thread after
    /// [`DEFAULT_REFLOW_DELAY`]. Use [`ThemeManager::builder`] for more control.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnknownDefault`] if `default_theme` is not in the catalog.
    pub fn initialize(
        catalog: ThemeCatalog,
        default_theme: &str,
        storage_key: &str,
        storage: impl Storage + 'static,
        surface: impl Surface + 'static,
    ) -> Result<Self, ThemeError> {
        Self::builder(catalog)
            .default_theme(default_theme)
            .storage_key(storage_key)
            .storage(storage)
            .surface(surface)
            .build()
    }

    /// Creates a builder over `catalog`.
    pub fn builder(catalog: ThemeCatalog) -> ThemeManagerBuilder {
        ThemeManagerBuilder::new(catalog)
    }

    /// Builds a manager from a loaded [`ThemeConfig`].
    ///
    /// Reflow notifications always run on a [`ThreadScheduler`]. To pick a
    /// different scheduler, start from [`ThemeManagerBuilder::from_config`].
    pub fn from_config(
        config: &ThemeConfig,
        storage: impl Storage + 'static,
        surface: impl Surface + 'static,
    ) -> Result<Self, ThemeError> {
        ThemeManagerBuilder::from_config(config)?
            .storage(storage)
            .surface(surface)
            .build()
    }

    /// Returns the selected theme.
    pub fn current_theme(&self) -> &str {
        &self.current
    }

    /// Returns the catalog themes in catalog order.
    pub fn available_themes(&self) -> &[String] {
        self.catalog.themes()
    }

    /// Returns the catalog the selection is drawn from.
    pub fn catalog(&self) -> &ThemeCatalog {
        &self.catalog
    }

    /// Returns the key the selection is persisted under.
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Selects `theme`, persists it and applies it to the surface.
    ///
    /// Themes outside the catalog are ignored and leave the selection
    /// unchanged. Re-selecting the current theme applies and persists it
    /// again. Returns whether the request was accepted.
    pub fn set_theme(&mut self, theme: &str) -> bool {
        if !self.catalog.contains(theme) {
            debug!(theme, "ignoring theme outside the catalog");
            return false;
        }

        if self.current != theme {
            debug!(from = %self.current, to = theme, "switching theme");
            self.current = theme.to_string();
        }
        self.apply_theme();

        for listener in &self.listeners {
            listener(&self.current);
        }
        true
    }

    /// Switches to `"dark"` when the current theme is `"light"`, otherwise to `"light"`.
    ///
    /// Any theme other than `"light"`, dark ones included, toggles to `"light"`.
    pub fn toggle_theme(&mut self) -> bool {
        let next = if self.current == "light" { "dark" } else { "light" };
        self.set_theme(next)
    }

    /// Returns true if the current theme is in the catalog's dark subset.
    pub fn is_dark_mode(&self) -> bool {
        self.catalog.is_dark(&self.current)
    }

    /// The color-scheme hint written for the current theme.
    ///
    /// Unlike [`is_dark_mode`](Self::is_dark_mode), only the literal `"dark"`
    /// theme yields [`ColorScheme::Dark`].
    pub fn color_scheme(&self) -> ColorScheme {
        ColorScheme::for_theme(&self.current)
    }

    /// Registers a callback run after every accepted selection, including
    /// re-selections of the current theme.
    pub fn on_change(&mut self, listener: impl Fn(&str) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Ends the session and returns the storage backend.
    ///
    /// Reflow notifications already scheduled still fire.
    pub fn teardown(self) -> Box<dyn Storage> {
        debug!(theme = %self.current, "theme manager torn down");
        self.storage
    }

    fn apply_theme(&mut self) {
        let theme = self.current.as_str();

        self.surface.set_theme_attribute(theme);
        self.surface.set_color_scheme(ColorScheme::for_theme(theme));

        if let Err(err) = self.storage.set(&self.storage_key, theme) {
            warn!(%err, key = %self.storage_key, theme, "could not persist theme; keeping it for this session only");
        }

        if let Some(hook) = self.surface.reflow_hook() {
            self.scheduler.defer(self.reflow_delay, Box::new(move || hook()));
        }
    }
}

impl fmt::Debug for ThemeManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeManager")
            .field("current", &self.current)
            .field("storage_key", &self.storage_key)
            .field("themes", &self.catalog.len())
            .field("reflow_delay", &self.reflow_delay)
            .finish_non_exhaustive()
    }
}

/// Builder for [`ThemeManager`].
///
/// Unset parts default to an in-memory store, an in-memory [`DocumentRoot`],
/// a [`ThreadScheduler`] and the `"daisyui-theme"` key. Without an explicit
/// default theme, `"light"` is used when the catalog has it and the first
/// catalog theme otherwise.
pub struct ThemeManagerBuilder {
    catalog: ThemeCatalog,
    default_theme: Option<String>,
    storage_key: String,
    storage: Option<Box<dyn Storage>>,
    surface: Option<Box<dyn Surface>>,
    scheduler: Arc<dyn Scheduler>,
    reflow_delay: Duration,
    follow_system: bool,
}

impl ThemeManagerBuilder {
    /// Creates a builder over `catalog` with every other part defaulted.
    pub fn new(catalog: ThemeCatalog) -> Self {
        Self {
            catalog,
            default_theme: None,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            storage: None,
            surface: None,
            scheduler: Arc::new(ThreadScheduler),
            reflow_delay: DEFAULT_REFLOW_DELAY,
            follow_system: false,
        }
    }

    /// Creates a builder seeded from a loaded [`ThemeConfig`].
    ///
    /// Storage, surface and scheduler keep their defaults and can still be set.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Catalog`] if the configured catalog is invalid.
    pub fn from_config(config: &ThemeConfig) -> Result<Self, ThemeError> {
        Ok(Self::new(config.catalog()?)
            .default_theme(&config.default_theme)
            .storage_key(&config.storage_key)
            .reflow_delay(config.reflow_delay())
            .follow_system(config.follow_system))
    }

    /// Sets the theme used when nothing valid is stored.
    pub fn default_theme(mut self, theme: &str) -> Self {
        self.default_theme = Some(theme.to_string());
        self
    }

    /// Sets the key the selection is persisted under.
    pub fn storage_key(mut self, key: &str) -> Self {
        self.storage_key = key.to_string();
        self
    }

    /// Sets the durable storage backend.
    pub fn storage(mut self, storage: impl Storage + 'static) -> Self {
        self.storage = Some(Box::new(storage));
        self
    }

    /// Sets the surface the theme is applied to.
    pub fn surface(mut self, surface: impl Surface + 'static) -> Self {
        self.surface = Some(Box::new(surface));
        self
    }

    /// Sets the scheduler that runs deferred reflow notifications.
    pub fn scheduler(mut self, scheduler: impl Scheduler + 'static) -> Self {
        self.scheduler = Arc::new(scheduler);
        self
    }

    /// Sets the delay before each reflow notification.
    pub fn reflow_delay(mut self, delay: Duration) -> Self {
        self.reflow_delay = delay;
        self
    }

    /// When nothing valid is stored, start from `"light"` or `"dark"` to
    /// match the OS preference, if the catalog has that theme.
    pub fn follow_system(mut self, follow: bool) -> Self {
        self.follow_system = follow;
        self
    }

    /// Resolves the starting theme and applies it.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnknownDefault`] if the default theme is not in the catalog.
    pub fn build(self) -> Result<ThemeManager, ThemeError> {
        let default_theme = match self.default_theme {
            Some(theme) if self.catalog.contains(&theme) => theme,
            Some(theme) => return Err(ThemeError::UnknownDefault(theme)),
            None if self.catalog.contains(DEFAULT_THEME) => DEFAULT_THEME.to_string(),
            None => self.catalog.themes()[0].clone(),
        };

        let storage = self
            .storage
            .unwrap_or_else(|| Box::new(MemoryStorage::new()));
        let surface = self
            .surface
            .unwrap_or_else(|| Box::new(DocumentRoot::new()));

        let stored = match storage.get(&self.storage_key) {
            Ok(Some(theme)) if self.catalog.contains(&theme) => Some(theme),
            Ok(Some(theme)) => {
                debug!(%theme, key = %self.storage_key, "stored theme is not in the catalog");
                None
            }
            Ok(None) => None,
            Err(err) => {
                warn!(%err, key = %self.storage_key, "could not read stored theme");
                None
            }
        };

        let current = stored.unwrap_or_else(|| {
            if self.follow_system {
                let preferred = detect_color_mode().theme_name();
                if self.catalog.contains(preferred) {
                    return preferred.to_string();
                }
            }
            default_theme
        });
        debug!(theme = %current, "theme manager initialized");

        let mut manager = ThemeManager {
            catalog: self.catalog,
            current,
            storage_key: self.storage_key,
            storage,
            surface,
            scheduler: self.scheduler,
            reflow_delay: self.reflow_delay,
            listeners: Vec::new(),
        };
        manager.apply_theme();
        Ok(manager)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflow::Immediate;
    use crate::storage::StorageError;
    use crate::system::{set_theme_detector, ColorMode};
    use serial_test::serial;
    use std::sync::Mutex;

    fn small_catalog() -> ThemeCatalog {
        ThemeCatalog::new(["light", "dark", "forest"], ["dark", "forest"]).unwrap()
    }

    fn manager_with(storage: MemoryStorage, root: DocumentRoot) -> ThemeManager {
        ThemeManager::builder(small_catalog())
            .default_theme("light")
            .storage_key("theme-preference")
            .storage(storage)
            .surface(root)
            .scheduler(Immediate)
            .build()
            .unwrap()
    }

    struct BrokenStorage;

    impl Storage for BrokenStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("access denied".into()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("quota exceeded".into()))
        }

        fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("access denied".into()))
        }
    }

    #[test]
    fn test_initialize_empty_storage_uses_default() {
        let storage = MemoryStorage::new();
        let root = DocumentRoot::new();
        let manager = manager_with(storage.clone(), root.clone());

        assert_eq!(manager.current_theme(), "light");
        assert_eq!(root.theme().as_deref(), Some("light"));
        assert_eq!(root.color_scheme(), Some(ColorScheme::Light));
        assert_eq!(
            storage.get("theme-preference").unwrap().as_deref(),
            Some("light")
        );
    }

    #[test]
    fn test_initialize_restores_stored_theme() {
        let storage = MemoryStorage::with_entries([("theme-preference", "forest")]);
        let manager = manager_with(storage, DocumentRoot::new());
        assert_eq!(manager.current_theme(), "forest");
    }

    #[test]
    fn test_initialize_ignores_unknown_stored_theme() {
        let storage = MemoryStorage::with_entries([("theme-preference", "cupcake")]);
        let manager = manager_with(storage.clone(), DocumentRoot::new());
        assert_eq!(manager.current_theme(), "light");
        assert_eq!(
            storage.get("theme-preference").unwrap().as_deref(),
            Some("light")
        );
    }

    #[test]
    fn test_initialize_ignores_empty_stored_value() {
        let storage = MemoryStorage::with_entries([("theme-preference", "")]);
        let manager = manager_with(storage, DocumentRoot::new());
        assert_eq!(manager.current_theme(), "light");
    }

    #[test]
    fn test_initialize_rejects_unknown_default() {
        let result = ThemeManager::builder(small_catalog())
            .default_theme("sepia")
            .scheduler(Immediate)
            .build();
        assert!(matches!(result, Err(ThemeError::UnknownDefault(t)) if t == "sepia"));
    }

    #[test]
    fn test_builder_default_theme_without_light() {
        let catalog = ThemeCatalog::new(["nord", "dim"], ["dim"]).unwrap();
        let manager = ThemeManager::builder(catalog)
            .scheduler(Immediate)
            .build()
            .unwrap();
        assert_eq!(manager.current_theme(), "nord");
        assert_eq!(manager.storage_key(), "daisyui-theme");
    }

    #[test]
    fn test_set_theme_valid() {
        let storage = MemoryStorage::new();
        let root = DocumentRoot::new();
        let mut manager = manager_with(storage.clone(), root.clone());

        assert!(manager.set_theme("dark"));
        assert_eq!(manager.current_theme(), "dark");
        assert_eq!(root.theme().as_deref(), Some("dark"));
        assert_eq!(root.color_scheme(), Some(ColorScheme::Dark));
        assert_eq!(
            storage.get("theme-preference").unwrap().as_deref(),
            Some("dark")
        );
    }

    #[test]
    fn test_set_theme_unknown_is_ignored() {
        let storage = MemoryStorage::new();
        let root = DocumentRoot::new();
        let mut manager = manager_with(storage.clone(), root.clone());
        manager.set_theme("forest");
        let reflows = root.reflow_count();

        assert!(!manager.set_theme("cupcake"));
        assert_eq!(manager.current_theme(), "forest");
        assert_eq!(root.theme().as_deref(), Some("forest"));
        assert_eq!(root.reflow_count(), reflows);
        assert_eq!(
            storage.get("theme-preference").unwrap().as_deref(),
            Some("forest")
        );
    }

    #[test]
    fn test_set_same_theme_reapplies() {
        let mut storage = MemoryStorage::new();
        let root = DocumentRoot::new();
        let mut manager = manager_with(storage.clone(), root.clone());
        manager.set_theme("forest");

        storage.remove("theme-preference").unwrap();
        let reflows = root.reflow_count();

        assert!(manager.set_theme("forest"));
        assert_eq!(manager.current_theme(), "forest");
        assert_eq!(root.reflow_count(), reflows + 1);
        assert_eq!(
            storage.get("theme-preference").unwrap().as_deref(),
            Some("forest")
        );
    }

    #[test]
    fn test_toggle_theme() {
        let mut manager = manager_with(MemoryStorage::new(), DocumentRoot::new());

        manager.toggle_theme();
        assert_eq!(manager.current_theme(), "dark");
        manager.toggle_theme();
        assert_eq!(manager.current_theme(), "light");

        manager.set_theme("forest");
        manager.toggle_theme();
        assert_eq!(manager.current_theme(), "light");
    }

    #[test]
    fn test_toggle_without_dark_in_catalog_is_noop() {
        let catalog = ThemeCatalog::new(["light", "nord"], Vec::<String>::new()).unwrap();
        let mut manager = ThemeManager::builder(catalog)
            .scheduler(Immediate)
            .build()
            .unwrap();

        assert!(!manager.toggle_theme());
        assert_eq!(manager.current_theme(), "light");
    }

    #[test]
    fn test_is_dark_mode_follows_dark_subset() {
        let mut manager = manager_with(MemoryStorage::new(), DocumentRoot::new());

        manager.set_theme("light");
        assert!(!manager.is_dark_mode());
        manager.set_theme("dark");
        assert!(manager.is_dark_mode());
        manager.set_theme("forest");
        assert!(manager.is_dark_mode());
    }

    #[test]
    fn test_color_scheme_only_for_literal_dark() {
        let root = DocumentRoot::new();
        let mut manager = manager_with(MemoryStorage::new(), root.clone());

        manager.set_theme("forest");
        assert!(manager.is_dark_mode());
        assert_eq!(manager.color_scheme(), ColorScheme::Light);
        assert_eq!(root.color_scheme(), Some(ColorScheme::Light));
    }

    #[test]
    fn test_available_themes_in_catalog_order() {
        let manager = manager_with(MemoryStorage::new(), DocumentRoot::new());
        assert_eq!(manager.available_themes(), ["light", "dark", "forest"]);
    }

    #[test]
    fn test_storage_failures_are_absorbed() {
        let root = DocumentRoot::new();
        let mut manager = ThemeManager::builder(small_catalog())
            .storage(BrokenStorage)
            .surface(root.clone())
            .scheduler(Immediate)
            .build()
            .unwrap();
        assert_eq!(manager.current_theme(), "light");

        assert!(manager.set_theme("dark"));
        assert_eq!(manager.current_theme(), "dark");
        assert_eq!(root.theme().as_deref(), Some("dark"));
    }

    #[test]
    fn test_on_change_listener() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut manager = manager_with(MemoryStorage::new(), DocumentRoot::new());
        manager.on_change(move |theme| sink.lock().unwrap().push(theme.to_string()));

        manager.set_theme("dark");
        manager.set_theme("unknown");
        manager.set_theme("dark");
        manager.toggle_theme();

        assert_eq!(*seen.lock().unwrap(), ["dark", "dark", "light"]);
    }

    #[test]
    fn test_teardown_returns_storage() {
        let mut manager = manager_with(MemoryStorage::new(), DocumentRoot::new());
        manager.set_theme("forest");
        let storage = manager.teardown();
        assert_eq!(
            storage.get("theme-preference").unwrap().as_deref(),
            Some("forest")
        );
    }

    #[test]
    #[serial(detector)]
    fn test_follow_system_seeds_first_run() {
        set_theme_detector(|| ColorMode::Dark);
        let manager = ThemeManager::builder(small_catalog())
            .follow_system(true)
            .scheduler(Immediate)
            .build()
            .unwrap();
        assert_eq!(manager.current_theme(), "dark");

        let stored = MemoryStorage::with_entries([("daisyui-theme", "forest")]);
        let manager = ThemeManager::builder(small_catalog())
            .follow_system(true)
            .storage(stored)
            .scheduler(Immediate)
            .build()
            .unwrap();
        assert_eq!(manager.current_theme(), "forest");

        set_theme_detector(|| ColorMode::Light);
    }

    #[test]
    #[serial(detector)]
    fn test_follow_system_falls_back_when_mode_theme_missing() {
        set_theme_detector(|| ColorMode::Dark);
        let catalog = ThemeCatalog::new(["light", "night"], ["night"]).unwrap();
        let manager = ThemeManager::builder(catalog)
            .follow_system(true)
            .scheduler(Immediate)
            .build()
            .unwrap();
        assert_eq!(manager.current_theme(), "light");

        set_theme_detector(|| ColorMode::Light);
    }

    #[test]
    fn test_from_config() {
        let config = ThemeConfig::from_yaml_str(
            "default_theme: forest\nstorage_key: prefs\nthemes: [light, dark, forest]\n",
        )
        .unwrap();
        let storage = MemoryStorage::new();
        let manager = ThemeManager::from_config(&config, storage.clone(), DocumentRoot::new()).unwrap();

        assert_eq!(manager.current_theme(), "forest");
        assert!(manager.is_dark_mode());
        assert_eq!(storage.get("prefs").unwrap().as_deref(), Some("forest"));
    }

    #[test]
    fn test_builder_from_config_accepts_scheduler() {
        let config = ThemeConfig::from_yaml_str(
            "default_theme: dark\nstorage_key: prefs\nreflow_delay_ms: 0\nthemes: [light, dark]\n",
        )
        .unwrap();
        let storage = MemoryStorage::new();
        let root = DocumentRoot::new();
        let mut manager = ThemeManagerBuilder::from_config(&config)
            .unwrap()
            .storage(storage.clone())
            .surface(root.clone())
            .scheduler(Immediate)
            .build()
            .unwrap();

        assert_eq!(manager.current_theme(), "dark");
        assert_eq!(manager.storage_key(), "prefs");
        assert_eq!(root.reflow_count(), 1);

        manager.toggle_theme();
        assert_eq!(root.reflow_count(), 2);
        assert_eq!(storage.get("prefs").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_builder_from_config_invalid_catalog() {
        let config = ThemeConfig::from_json_str(r#"{"themes": []}"#).unwrap();
        let result = ThemeManagerBuilder::from_config(&config);
        assert!(matches!(result, Err(ThemeError::Catalog(_))));
    }

    #[test]
    fn test_from_config_invalid_catalog() {
        let config = ThemeConfig::from_json_str(r#"{"themes": ["a", "a"]}"#).unwrap();
        let result = ThemeManager::from_config(&config, MemoryStorage::new(), DocumentRoot::new());
        assert!(matches!(result, Err(ThemeError::Catalog(_))));
    }
}
