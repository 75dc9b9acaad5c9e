//! Quote display: amounts, exchange rate, freshness badge, gas fee.

use crate::core::quote::Quote;
use crate::state::prices::use_price_context;
use crate::state::swap::use_swap_context;
use crate::utils::format::{format_eth_cost, format_rate};
use leptos::prelude::*;
use shared::GasEstimateResponse;

#[component]
pub fn QuotePanel(
    quote: Memo<Quote>,
    gas: RwSignal<Option<GasEstimateResponse>>,
) -> impl IntoView {
    let prices = use_price_context();
    let swap = use_swap_context();

    // "Live" requires a provider-fed book AND no 1.0 price substitution
    let live = Memo::new(move |_| prices.book.with(|b| b.live) && !quote.get().estimated);

    view! {
        <div class="quote-panel">
            <div class="quote-row">
                <span class="quote-label">"You pay"</span>
                <span class="quote-value">
                    {move || quote.get().source_token_amount}
                    " "
                    {move || swap.selection.with(|s| s.source().to_string())}
                </span>
            </div>
            <div class="quote-row">
                <span class="quote-label">"You receive"</span>
                <span class="quote-value">
                    {move || quote.get().target_token_amount}
                    " "
                    {move || swap.selection.with(|s| s.target().to_string())}
                </span>
            </div>
            <div class="quote-row rate-row">
                <span class="quote-label">"Rate"</span>
                <span class="quote-value">
                    "1 " {move || swap.selection.with(|s| s.source().to_string())}
                    " = "
                    {move || format_rate(quote.get().exchange_rate)}
                    " "
                    {move || swap.selection.with(|s| s.target().to_string())}
                </span>
                <span class="badge" class=("badge-estimated", move || !live.get())>
                    {move || if live.get() { "Live" } else { "Estimated" }}
                </span>
            </div>
            <div class="quote-row gas-row">
                <span class="quote-label">"Network fee"</span>
                <span class="quote-value">
                    {move || match gas.get() {
                        Some(est) => {
                            format!("~{}", format_eth_cost(est.estimated_costs.token_swap.cost_eth))
                        }
                        None => "unavailable".to_string(),
                    }}
                </span>
            </div>
        </div>
    }
}
