//! SwapDeck application shell.

use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};
use std::rc::Rc;

use crate::components::Navbar;
use crate::core::selection::TokenSelection;
use crate::pages::SwapPage;
use crate::services::storage::{LocalStore, PreferenceStore};
use crate::state::preferences::provide_preferences_context;
use crate::state::prices::provide_price_context;
use crate::state::swap::provide_swap_context;
use crate::utils::constants::SUPPORTED_TOKENS;
use crate::utils::url::get_query_param;
use shared::normalize_symbol;

#[component]
pub fn App() -> impl IntoView {
    let store: Rc<dyn PreferenceStore> = Rc::new(LocalStore);
    let (prefs, mut selection) = provide_preferences_context(store);

    // ?from= / ?to= deep links override the persisted pair for this load only
    if let Some(to) = query_symbol("to") {
        selection = TokenSelection::new(selection.source(), to);
    }
    if let Some(from) = query_symbol("from") {
        if from != selection.source() {
            selection.select(&from);
        }
    }

    let prices = provide_price_context();
    prices.start_polling();
    provide_swap_context(selection);

    // Reflect the theme onto <body> so the CSS variable set switches
    Effect::new(move || {
        let theme = prefs.theme.get();
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            if let Err(e) = body.set_attribute("data-theme", theme.as_str()) {
                log::warn!("Failed to apply theme: {:?}", e);
            }
        }
    });

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=SwapPage/>
                </Routes>
            </div>
        </Router>
    }
}

/// A supported token symbol from the URL query, if present.
fn query_symbol(key: &str) -> Option<String> {
    let symbol = normalize_symbol(&get_query_param(key)?);
    SUPPORTED_TOKENS
        .contains(&symbol.as_str())
        .then_some(symbol)
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="app-container centered">
            <div class="card" style="max-width: 500px; text-align: center;">
                <h1>"404 - Page Not Found"</h1>
                <p>"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="btn" style="margin-top: 20px; display: inline-block;">
                        "Back to the swap"
                    </span>
                </A>
            </div>
        </div>
    }
}
