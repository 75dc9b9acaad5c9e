//! The swap button, rendered from the derived button state.

use crate::core::lifecycle::ButtonState;
use crate::state::swap::use_swap_context;
use leptos::prelude::*;

#[component]
pub fn SwapButton(button: Memo<ButtonState>, executable: Memo<bool>) -> impl IntoView {
    let swap = use_swap_context();

    view! {
        <button
            class="btn swap-btn"
            class=("btn-error", move || button.get().error)
            prop:disabled=move || !button.get().enabled
            on:click=move |_| swap.request_swap(executable.get_untracked())
        >
            {move || button.get().label}
        </button>
    }
}
