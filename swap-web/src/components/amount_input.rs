//! USD amount input, persisted as the user types.

use crate::state::preferences::use_preferences_context;
use leptos::prelude::*;

#[component]
pub fn AmountInput(
    /// Fired on Enter: executes the swap directly, skipping the dialog.
    on_submit: Callback<()>,
) -> impl IntoView {
    let prefs = use_preferences_context();

    view! {
        <div class="amount-field">
            <label for="usd-amount">"Amount (USD)"</label>
            <input
                id="usd-amount"
                type="text"
                inputmode="decimal"
                placeholder="0.00"
                prop:value=move || prefs.usd_amount.get()
                on:input=move |ev| prefs.set_usd_amount(event_target_value(&ev))
                on:keydown=move |ev| {
                    if ev.key() == "Enter" {
                        on_submit.run(());
                    }
                }
            />
        </div>
    }
}
