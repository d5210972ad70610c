//! Light/dark theme preference
//!
//! Resolution order: persisted value, then the OS dark-mode signal. The
//! preference store is a trait so the browser (localStorage) and tests
//! (in-memory map) plug in their own backing; persistence is best-effort
//! and a failing store silently degrades to session-only state.

use std::cell::RefCell;
use std::collections::HashMap;

/// Storage key holding the literal string `"light"` or `"dark"`
pub const THEME_STORAGE_KEY: &str = "theme";

/// Current palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Flip between the two variants; applying twice is the identity
    pub fn toggle(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_name(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// One-key string store; `set` is best-effort and must not panic
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-memory store used in tests and as a session-only fallback
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// Resolve the startup theme: persisted preference wins; the OS signal is
/// queried only when nothing usable is persisted. The result is written
/// back so the next load skips the OS query.
pub fn initial_theme(store: &impl PreferenceStore, os_prefers_dark: impl FnOnce() -> bool) -> Theme {
    let theme = store
        .get(THEME_STORAGE_KEY)
        .and_then(|value| Theme::from_name(&value))
        .unwrap_or_else(|| {
            if os_prefers_dark() {
                Theme::Dark
            } else {
                Theme::Light
            }
        });
    store.set(THEME_STORAGE_KEY, theme.as_str());
    theme
}

/// Persist a changed preference
pub fn persist_theme(store: &impl PreferenceStore, theme: Theme) {
    store.set(THEME_STORAGE_KEY, theme.as_str());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_involution() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.toggle().toggle(), theme);
        }
    }

    #[test]
    fn test_name_roundtrip() {
        assert_eq!(Theme::from_name(Theme::Dark.as_str()), Some(Theme::Dark));
        assert_eq!(Theme::from_name(Theme::Light.as_str()), Some(Theme::Light));
        assert_eq!(Theme::from_name("solarized"), None);
    }

    #[test]
    fn test_initial_prefers_persisted_value() {
        let store = MemoryStore::default();
        store.set(THEME_STORAGE_KEY, "dark");

        assert_eq!(initial_theme(&store, || false), Theme::Dark);
    }

    #[test]
    fn test_initial_skips_os_query_when_persisted() {
        use std::cell::Cell;

        let store = MemoryStore::default();
        store.set(THEME_STORAGE_KEY, "light");
        let queried = Cell::new(false);

        let theme = initial_theme(&store, || {
            queried.set(true);
            true
        });

        assert_eq!(theme, Theme::Light);
        assert!(!queried.get());
    }

    #[test]
    fn test_initial_falls_back_to_os_signal() {
        let store = MemoryStore::default();

        assert_eq!(initial_theme(&store, || true), Theme::Dark);
        // the resolved value was written back
        assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn test_initial_ignores_garbage_value() {
        let store = MemoryStore::default();
        store.set(THEME_STORAGE_KEY, "neon");

        assert_eq!(initial_theme(&store, || false), Theme::Light);
    }

    #[test]
    fn test_persist_overwrites() {
        let store = MemoryStore::default();
        persist_theme(&store, Theme::Dark);
        persist_theme(&store, Theme::Light);

        assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some("light"));
    }
}
