//! Swap state: token selection plus the lifecycle machine and its timers.

use crate::core::lifecycle::{Lifecycle, SwapPhase};
use crate::core::selection::TokenSelection;
use crate::state::preferences::PreferencesContext;
use crate::utils::constants::{SWAP_COMPLETE_RESET_MS, SWAP_EXECUTE_MS};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use uuid::Uuid;

/// Swap context shared across the page.
#[derive(Clone, Copy)]
pub struct SwapContext {
    pub selection: RwSignal<TokenSelection>,
    pub lifecycle: RwSignal<Lifecycle>,
    /// Mock transaction id, present while the success state is displayed.
    pub tx_id: RwSignal<Option<String>>,
}

impl SwapContext {
    pub fn new(selection: TokenSelection) -> Self {
        Self {
            selection: RwSignal::new(selection),
            lifecycle: RwSignal::new(Lifecycle::new()),
            tx_id: RwSignal::new(None),
        }
    }

    pub fn phase(&self) -> SwapPhase {
        self.lifecycle.with(|l| l.phase())
    }

    pub fn swap_positions(&self, prefs: &PreferencesContext) {
        self.selection.update(|s| s.swap_positions());
        self.selection.with_untracked(|s| prefs.persist_selection(s));
    }

    pub fn select_token(&self, symbol: &str, prefs: &PreferencesContext) {
        self.selection.update(|s| s.select(symbol));
        self.selection.with_untracked(|s| prefs.persist_selection(s));
    }

    /// Open the confirmation dialog. No-op unless idle with a valid request.
    pub fn request_swap(&self, valid: bool) {
        self.lifecycle.update(|l| {
            l.request(valid);
        });
    }

    pub fn cancel(&self) {
        self.lifecycle.update(|l| l.cancel());
    }

    /// User confirmed the dialog; run the simulated execution.
    pub fn confirm(&self) {
        if let Some(token) = self.lifecycle.try_update(|l| l.confirm()).flatten() {
            self.run_execution(token);
        }
    }

    /// Execute directly, skipping the confirmation step.
    pub fn execute_now(&self, valid: bool) {
        if let Some(token) = self.lifecycle.try_update(|l| l.begin(valid)).flatten() {
            self.run_execution(token);
        }
    }

    /// Drive the two timed transitions. Both checks go through the epoch
    /// token, so timers from a superseded attempt fall through silently.
    fn run_execution(&self, token: u64) {
        let lifecycle = self.lifecycle;
        let tx_id = self.tx_id;

        leptos::task::spawn_local(async move {
            TimeoutFuture::new(SWAP_EXECUTE_MS).await;
            let completed = lifecycle.try_update(|l| l.finish(token)).unwrap_or(false);
            if !completed {
                return;
            }

            let signature = Uuid::new_v4().to_string();
            log::info!("Simulated swap complete: {}", signature);
            tx_id.set(Some(signature));

            TimeoutFuture::new(SWAP_COMPLETE_RESET_MS).await;
            if lifecycle.try_update(|l| l.reset(token)).unwrap_or(false) {
                tx_id.set(None);
            }
        });
    }
}

pub fn provide_swap_context(selection: TokenSelection) -> SwapContext {
    let context = SwapContext::new(selection);
    provide_context(context);
    context
}

pub fn use_swap_context() -> SwapContext {
    expect_context::<SwapContext>()
}
