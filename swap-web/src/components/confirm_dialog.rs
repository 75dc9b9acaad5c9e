//! Confirmation dialog shown between requesting and executing a swap.

use crate::core::lifecycle::SwapPhase;
use crate::core::quote::Quote;
use crate::state::swap::use_swap_context;
use leptos::prelude::*;

#[component]
pub fn ConfirmDialog(quote: Memo<Quote>) -> impl IntoView {
    let swap = use_swap_context();

    view! {
        <Show when=move || swap.lifecycle.with(|l| l.phase() == SwapPhase::Confirming)>
            <div class="overlay">
                <div class="card dialog">
                    <h2>"Confirm swap"</h2>
                    <p class="dialog-summary">
                        {move || {
                            let q = quote.get();
                            swap.selection.with(|s| {
                                format!(
                                    "Swap {} {} for {} {}?",
                                    q.source_token_amount,
                                    s.source(),
                                    q.target_token_amount,
                                    s.target()
                                )
                            })
                        }}
                    </p>
                    <Show when=move || quote.get().estimated>
                        <p class="dialog-warning">
                            "Some prices are estimated; the executed amounts may differ."
                        </p>
                    </Show>
                    <div class="dialog-actions">
                        <button class="btn" on:click=move |_| swap.confirm()>
                            "Confirm"
                        </button>
                        <button class="btn btn-secondary" on:click=move |_| swap.cancel()>
                            "Cancel"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
