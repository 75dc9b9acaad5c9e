//! Persisted preferences over browser localStorage.
//!
//! Storage is an injected collaborator behind [`PreferenceStore`], not an
//! ambient global: the app hands [`LocalStore`] in at mount, tests hand in a
//! map. Each preference persists under its own key as a JSON-encoded string;
//! a corrupted value falls back to that key's default without touching the
//! rest, and write failures (quota, private browsing) are logged and
//! swallowed.

use crate::utils::constants::{DEFAULT_SOURCE_TOKEN, DEFAULT_TARGET_TOKEN, DEFAULT_USD_AMOUNT};
use serde::{Deserialize, Serialize};

/// Key-value string storage. `save` must not propagate failures.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
}

/// Storage keys, one per independently-persisted preference.
pub mod keys {
    pub const SOURCE_TOKEN: &str = "swapdeck.source_token";
    pub const TARGET_TOKEN: &str = "swapdeck.target_token";
    pub const USD_AMOUNT: &str = "swapdeck.usd_amount";
    pub const THEME: &str = "swapdeck.theme";
}

/// UI color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Preferences as loaded from the store, defaults already applied.
///
/// `theme` stays `None` when nothing was persisted so the caller can seed it
/// from the OS preference instead of forcing light mode.
#[derive(Debug, Clone, PartialEq)]
pub struct Preferences {
    pub source_token: String,
    pub target_token: String,
    pub usd_amount: String,
    pub theme: Option<Theme>,
}

/// Load all preferences. Every key decodes independently; a bad value only
/// resets its own key.
pub fn load_preferences(store: &dyn PreferenceStore) -> Preferences {
    Preferences {
        source_token: load_json(store, keys::SOURCE_TOKEN)
            .unwrap_or_else(|| DEFAULT_SOURCE_TOKEN.to_string()),
        target_token: load_json(store, keys::TARGET_TOKEN)
            .unwrap_or_else(|| DEFAULT_TARGET_TOKEN.to_string()),
        usd_amount: load_json(store, keys::USD_AMOUNT)
            .unwrap_or_else(|| DEFAULT_USD_AMOUNT.to_string()),
        theme: load_json(store, keys::THEME),
    }
}

pub fn save_source_token(store: &dyn PreferenceStore, symbol: &str) {
    save_json(store, keys::SOURCE_TOKEN, &symbol);
}

pub fn save_target_token(store: &dyn PreferenceStore, symbol: &str) {
    save_json(store, keys::TARGET_TOKEN, &symbol);
}

pub fn save_usd_amount(store: &dyn PreferenceStore, amount: &str) {
    save_json(store, keys::USD_AMOUNT, &amount);
}

pub fn save_theme(store: &dyn PreferenceStore, theme: Theme) {
    save_json(store, keys::THEME, &theme);
}

fn load_json<T: serde::de::DeserializeOwned>(store: &dyn PreferenceStore, key: &str) -> Option<T> {
    let raw = store.load(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Corrupted preference {} ({}); using default", key, e);
            None
        }
    }
}

fn save_json<T: Serialize>(store: &dyn PreferenceStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(encoded) => store.save(key, &encoded),
        Err(e) => log::warn!("Failed to encode preference {}: {}", key, e),
    }
}

/// localStorage-backed store.
pub struct LocalStore;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, value: &str) {
        match local_storage() {
            Some(storage) => {
                // Quota and privacy-mode errors land here; the swap must not abort
                if let Err(e) = storage.set_item(key, value) {
                    log::warn!("Failed to persist {}: {:?}", key, e);
                }
            }
            None => log::warn!("localStorage unavailable; {} not persisted", key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        entries: RefCell<HashMap<String, String>>,
    }

    impl PreferenceStore for MemoryStore {
        fn load(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn save(&self, key: &str, value: &str) {
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }
    }

    #[test]
    fn defaults_on_empty_store() {
        let store = MemoryStore::default();
        let prefs = load_preferences(&store);
        assert_eq!(prefs.source_token, "USDC");
        assert_eq!(prefs.target_token, "ETH");
        assert_eq!(prefs.usd_amount, "100");
        assert_eq!(prefs.theme, None);
    }

    #[test]
    fn round_trip() {
        let store = MemoryStore::default();
        save_source_token(&store, "WBTC");
        save_usd_amount(&store, "250.5");
        save_theme(&store, Theme::Dark);

        let prefs = load_preferences(&store);
        assert_eq!(prefs.source_token, "WBTC");
        assert_eq!(prefs.target_token, "ETH");
        assert_eq!(prefs.usd_amount, "250.5");
        assert_eq!(prefs.theme, Some(Theme::Dark));
    }

    #[test]
    fn corrupted_key_falls_back_alone() {
        let store = MemoryStore::default();
        save_source_token(&store, "SOL");
        store.save(keys::TARGET_TOKEN, "{not json");
        store.save(keys::THEME, "\"mauve\"");

        let prefs = load_preferences(&store);
        assert_eq!(prefs.source_token, "SOL");
        assert_eq!(prefs.target_token, "ETH");
        assert_eq!(prefs.theme, None);
    }

    #[test]
    fn values_are_json_encoded() {
        let store = MemoryStore::default();
        save_usd_amount(&store, "100");
        assert_eq!(store.load(keys::USD_AMOUNT).unwrap(), "\"100\"");
    }

    #[test]
    fn theme_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }
}
