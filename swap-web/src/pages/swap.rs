//! The swap form page.
//!
//! Wires the pure core to the reactive contexts: the quote, validation, and
//! button state are derived memos recomputed synchronously on every change
//! to the selection, the amount, or the price book.

use crate::components::{AmountInput, ConfirmDialog, QuotePanel, SwapButton, TokenPicker};
use crate::core::lifecycle::button_state;
use crate::core::quote::compute_quote;
use crate::core::validate::{has_insufficient_balance, is_valid_usd_amount};
use crate::services::api::fetch_gas_estimate;
use crate::state::preferences::use_preferences_context;
use crate::state::prices::use_price_context;
use crate::state::swap::use_swap_context;
use leptos::prelude::*;
use shared::GasEstimateResponse;

#[component]
pub fn SwapPage() -> impl IntoView {
    let prefs = use_preferences_context();
    let prices = use_price_context();
    let swap = use_swap_context();

    // Gas is fetched once per page visit; prices poll separately
    let gas = RwSignal::new(None::<GasEstimateResponse>);
    leptos::task::spawn_local(async move {
        match fetch_gas_estimate().await {
            Ok(estimate) => gas.set(Some(estimate)),
            Err(e) => log::warn!("Gas estimate unavailable: {}", e),
        }
    });

    let quote = Memo::new(move |_| {
        let amount = prefs.usd_amount.get();
        swap.selection.with(|sel| {
            prices
                .book
                .with(|book| compute_quote(&amount, book.get(sel.source()), book.get(sel.target())))
        })
    });

    let valid_amount = Memo::new(move |_| is_valid_usd_amount(&prefs.usd_amount.get()));

    let insufficient = Memo::new(move |_| {
        let q = quote.get();
        swap.selection.with(|sel| {
            prices.book.with(|book| {
                has_insufficient_balance(&q.source_token_amount, sel.source(), &book.tokens)
            })
        })
    });

    let executable = Memo::new(move |_| {
        valid_amount.get() && !insufficient.get() && !swap.lifecycle.with(|l| l.is_executing())
    });

    let button = Memo::new(move |_| {
        let phase = swap.lifecycle.with(|l| l.phase());
        swap.selection.with(|sel| {
            button_state(
                phase,
                valid_amount.get(),
                insufficient.get(),
                sel.source(),
                sel.target(),
            )
        })
    });

    let source_balance = Memo::new(move |_| {
        swap.selection.with(|sel| {
            prices.book.with(|book| {
                book.get(sel.source())
                    .and_then(|t| t.balance)
                    .map(|b| format!("Balance: {} {}", b, sel.source()))
            })
        })
    });

    view! {
        <div class="swap-page">
            <div class="card swap-card">
                <h1>"Swap tokens"</h1>
                <TokenPicker/>
                <AmountInput on_submit=Callback::new(move |_| {
                    swap.execute_now(executable.get_untracked())
                })/>
                <p class="balance-note">{move || source_balance.get().unwrap_or_default()}</p>
                <QuotePanel quote=quote gas=gas/>
                <Show when=move || insufficient.get()>
                    <p class="error-text">
                        {move || {
                            swap.selection
                                .with(|s| format!("Insufficient {} balance for this swap", s.source()))
                        }}
                    </p>
                </Show>
                <SwapButton button=button executable=executable/>
                <Show when=move || swap.tx_id.with(|t| t.is_some())>
                    <p class="tx-note">
                        "Transaction " {move || swap.tx_id.get().unwrap_or_default()}
                    </p>
                </Show>
            </div>
            <ConfirmDialog quote=quote/>
        </div>
    }
}
