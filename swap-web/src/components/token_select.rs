//! Token picker grid.
//!
//! One shared grid rather than two dropdowns: clicking the current source or
//! target swaps the roles, clicking anything else claims the source role.

use crate::state::preferences::use_preferences_context;
use crate::state::swap::use_swap_context;
use crate::utils::constants::SUPPORTED_TOKENS;
use leptos::prelude::*;

#[component]
pub fn TokenPicker() -> impl IntoView {
    let prefs = use_preferences_context();
    let swap = use_swap_context();

    view! {
        <div class="token-picker">
            <div class="token-grid">
                {SUPPORTED_TOKENS
                    .iter()
                    .map(|symbol| {
                        let symbol = *symbol;
                        view! {
                            <button
                                class="token-chip"
                                class=("role-source", move || swap.selection.with(|s| s.source() == symbol))
                                class=("role-target", move || swap.selection.with(|s| s.target() == symbol))
                                on:click=move |_| swap.select_token(symbol, &prefs)
                            >
                                {symbol}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="pair-row">
                <span class="pair-role">
                    "Sell " {move || swap.selection.with(|s| s.source().to_string())}
                </span>
                <button
                    class="swap-positions"
                    title="Swap source and target"
                    on:click=move |_| swap.swap_positions(&prefs)
                >
                    "\u{21C4}"
                </button>
                <span class="pair-role">
                    "Buy " {move || swap.selection.with(|s| s.target().to_string())}
                </span>
            </div>
        </div>
    }
}
