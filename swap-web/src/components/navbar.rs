//! Navigation Bar Component

use crate::services::storage::Theme;
use crate::state::preferences::use_preferences_context;
use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    let prefs = use_preferences_context();

    view! {
        <nav>
            <div class="nav-inner">
                <span class="nav-title">
                    <span class="brand-accent">"Swap"</span><span class="brand-rest">"Deck"</span>
                </span>
                <button
                    class="theme-toggle"
                    on:click=move |_| prefs.toggle_theme()
                >
                    {move || match prefs.theme.get() {
                        Theme::Light => "Dark mode",
                        Theme::Dark => "Light mode",
                    }}
                </button>
            </div>
        </nav>
    }
}
