//! Persisted preference state.
//!
//! The store is injected at mount; everything below talks to the
//! [`PreferenceStore`] trait so tests never need a browser.

use crate::core::selection::TokenSelection;
use crate::services::storage::{
    load_preferences, save_source_token, save_target_token, save_theme, save_usd_amount,
    PreferenceStore, Theme,
};
use leptos::prelude::*;
use std::rc::Rc;

/// Preference context: the persisted USD amount and theme, plus the store
/// handle for write-through persistence.
#[derive(Clone, Copy)]
pub struct PreferencesContext {
    pub usd_amount: RwSignal<String>,
    pub theme: RwSignal<Theme>,
    store: StoredValue<Rc<dyn PreferenceStore>, LocalStorage>,
}

impl PreferencesContext {
    /// Update the USD amount, persisting as the user types.
    pub fn set_usd_amount(&self, value: String) {
        self.store
            .with_value(|store| save_usd_amount(store.as_ref(), &value));
        self.usd_amount.set(value);
    }

    pub fn toggle_theme(&self) {
        let next = self.theme.get_untracked().toggled();
        self.store.with_value(|store| save_theme(store.as_ref(), next));
        self.theme.set(next);
    }

    /// Persist both roles. Two independent writes, last-writer-wins per key.
    pub fn persist_selection(&self, selection: &TokenSelection) {
        self.store.with_value(|store| {
            save_source_token(store.as_ref(), selection.source());
            save_target_token(store.as_ref(), selection.target());
        });
    }
}

/// Load preferences, seed the context, and hand back the restored selection
/// for the swap context to own.
pub fn provide_preferences_context(
    store: Rc<dyn PreferenceStore>,
) -> (PreferencesContext, TokenSelection) {
    let prefs = load_preferences(store.as_ref());
    let theme = prefs.theme.unwrap_or_else(os_theme);
    let selection = TokenSelection::new(&prefs.source_token, &prefs.target_token);

    let context = PreferencesContext {
        usd_amount: RwSignal::new(prefs.usd_amount),
        theme: RwSignal::new(theme),
        store: StoredValue::new_local(store),
    };
    provide_context(context);
    (context, selection)
}

pub fn use_preferences_context() -> PreferencesContext {
    expect_context::<PreferencesContext>()
}

/// OS color-scheme preference, falling back to light.
fn os_theme() -> Theme {
    let prefers_dark = web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|m| m.matches())
        .unwrap_or(false);

    if prefers_dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}
