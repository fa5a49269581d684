use std::{
    collections::HashMap,
    fmt,
    str::FromStr,
    sync::{Arc, Mutex},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Key of the single durable entry holding the user's theme choice.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme: {0:?}")]
pub struct ThemeParseError(pub String);

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("couldn't write to storage: {0}")]
    Write(String),
}

/// Durable key-value backing for the theme (browser `localStorage` in the app).
pub trait ThemeStorage: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn store(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory storage. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }
}

impl ThemeStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::Unavailable)?;
        Ok(entries.get(key).cloned())
    }

    fn store(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StorageError::Write(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Picks the starting theme: a valid stored value wins, then the OS preference,
/// then light.
pub fn resolve_initial(stored: Option<&str>, prefers_dark: Option<bool>) -> Theme {
    if let Some(raw) = stored {
        match raw.parse::<Theme>() {
            Ok(theme) => return theme,
            Err(e) => log::warn!("ignoring stored theme: {e}"),
        }
    }
    match prefers_dark {
        Some(true) => Theme::Dark,
        _ => Theme::Light,
    }
}

type Subscriber = Box<dyn Fn(Theme) + Send + Sync>;

pub struct ThemeStore {
    theme: Theme,
    storage: Box<dyn ThemeStorage>,
    subscribers: Vec<Subscriber>,
}

impl ThemeStore {
    /// Loads the persisted theme, falling back to `prefers_dark` and then light.
    /// A storage that can't be read is treated as empty.
    pub fn init(storage: impl ThemeStorage + 'static, prefers_dark: Option<bool>) -> Self {
        let stored = match storage.load(THEME_STORAGE_KEY) {
            Ok(stored) => stored,
            Err(e) => {
                log::warn!("theme storage read failed, using defaults: {e}");
                None
            }
        };
        let theme = resolve_initial(stored.as_deref(), prefers_dark);
        Self {
            theme,
            storage: Box::new(storage),
            subscribers: Vec::new(),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Registers `f` for every future change. `f` is called once right away with
    /// the current theme so observers never start out of sync.
    pub fn subscribe(&mut self, f: impl Fn(Theme) + Send + Sync + 'static) {
        f(self.theme);
        self.subscribers.push(Box::new(f));
    }

    /// Flips the theme, persists it, notifies subscribers and returns the new value.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(e) = self.storage.store(THEME_STORAGE_KEY, self.theme.as_str()) {
            // in-memory value stays authoritative for this session
            log::warn!("couldn't persist theme: {e}");
        }
        log::debug!("theme changed to {}", self.theme);
        for subscriber in &self.subscribers {
            subscriber(self.theme);
        }
        self.theme
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    struct BrokenStorage;

    impl ThemeStorage for BrokenStorage {
        fn load(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn store(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write("quota exceeded".to_string()))
        }
    }

    fn storage_with(value: &str) -> MemoryStorage {
        let mut storage = MemoryStorage::new();
        storage.store(THEME_STORAGE_KEY, value).unwrap();
        storage
    }

    #[test]
    fn test_init_prefers_os_dark_when_nothing_stored() {
        let store = ThemeStore::init(MemoryStorage::new(), Some(true));
        assert_eq!(store.theme(), Theme::Dark);
    }

    #[test]
    fn test_init_defaults_to_light() {
        assert_eq!(ThemeStore::init(MemoryStorage::new(), None).theme(), Theme::Light);
        assert_eq!(
            ThemeStore::init(MemoryStorage::new(), Some(false)).theme(),
            Theme::Light
        );
    }

    #[test]
    fn test_stored_value_beats_os_preference() {
        let store = ThemeStore::init(storage_with("light"), Some(true));
        assert_eq!(store.theme(), Theme::Light);

        let store = ThemeStore::init(storage_with("dark"), Some(false));
        assert_eq!(store.theme(), Theme::Dark);
    }

    #[test]
    fn test_malformed_stored_value_is_ignored() {
        let store = ThemeStore::init(storage_with("purple"), Some(true));
        assert_eq!(store.theme(), Theme::Dark);

        let store = ThemeStore::init(storage_with("Dark"), None);
        assert_eq!(store.theme(), Theme::Light);
    }

    #[test]
    fn test_toggle_twice_persists_each_step() {
        let storage = MemoryStorage::new();
        let mut store = ThemeStore::init(storage.clone(), None);
        assert_eq!(store.theme(), Theme::Light);
        assert_eq!(storage.get(THEME_STORAGE_KEY), None);

        assert_eq!(store.toggle(), Theme::Dark);
        assert_eq!(storage.get(THEME_STORAGE_KEY).as_deref(), Some("dark"));

        assert_eq!(store.toggle(), Theme::Light);
        assert_eq!(storage.get(THEME_STORAGE_KEY).as_deref(), Some("light"));
        assert_eq!(store.theme(), Theme::Light);
    }

    #[test]
    fn test_broken_storage_degrades_to_memory() {
        let mut store = ThemeStore::init(BrokenStorage, Some(true));
        assert_eq!(store.theme(), Theme::Dark);
        assert_eq!(store.toggle(), Theme::Light);
        assert_eq!(store.theme(), Theme::Light);
        assert_eq!(store.toggle(), Theme::Dark);
    }

    #[test]
    fn test_subscribers_see_current_and_changes() {
        let calls = Arc::new(AtomicUsize::new(0));
        let last = Arc::new(Mutex::new(None));
        let mut store = ThemeStore::init(MemoryStorage::new(), None);

        let (c, l) = (calls.clone(), last.clone());
        store.subscribe(move |theme| {
            c.fetch_add(1, Ordering::SeqCst);
            *l.lock().unwrap() = Some(theme);
        });
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(*last.lock().unwrap(), Some(Theme::Light));

        store.toggle();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(*last.lock().unwrap(), Some(Theme::Dark));
    }

    #[test]
    fn test_theme_string_forms() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(Theme::Light.to_string(), "light");
        assert!("".parse::<Theme>().is_err());
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    }
}
