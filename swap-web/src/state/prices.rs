//! Price book state and polling.
//!
//! Each fetch carries a monotonic sequence number; a response that arrives
//! after a newer one has already been applied is discarded, so fresher data
//! always supersedes an in-flight quote computation.

use crate::services::api::{fallback_tokens, fetch_tokens};
use crate::utils::constants::{PRICE_UPDATE_INTERVAL_MS, SUPPORTED_TOKENS};
use leptos::prelude::*;
use shared::TokenInfo;
use std::collections::HashMap;

/// Current token data plus the freshness signal feeding the Live/Estimated
/// badge.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PriceBook {
    pub tokens: HashMap<String, TokenInfo>,
    /// True when the data came from the provider rather than fallback/cache.
    pub live: bool,
    seq: u64,
}

impl PriceBook {
    pub fn get(&self, symbol: &str) -> Option<&TokenInfo> {
        self.tokens.get(symbol)
    }
}

/// Fold one fetch outcome into the book. Stale sequence numbers are ignored;
/// a failed fetch keeps cached data (seeding fallback data when the cache is
/// empty) and drops the live flag.
pub fn apply_fetch_result(
    book: &mut PriceBook,
    seq: u64,
    result: Result<Vec<TokenInfo>, String>,
) {
    if seq <= book.seq {
        log::debug!(
            "Discarding out-of-order price response (seq {} <= {})",
            seq,
            book.seq
        );
        return;
    }
    book.seq = seq;

    match result {
        Ok(tokens) => {
            book.tokens = index_by_symbol(tokens);
            book.live = true;
        }
        Err(e) => {
            if book.tokens.is_empty() {
                log::warn!("Price fetch failed: {}; using fallback data", e);
                book.tokens = index_by_symbol(fallback_tokens());
            } else {
                log::warn!("Price fetch failed: {}; keeping cached data", e);
            }
            book.live = false;
        }
    }
}

fn index_by_symbol(tokens: Vec<TokenInfo>) -> HashMap<String, TokenInfo> {
    tokens.into_iter().map(|t| (t.symbol.clone(), t)).collect()
}

#[derive(Clone, Copy)]
pub struct PriceContext {
    pub book: RwSignal<PriceBook>,
    next_seq: RwSignal<u64>,
}

impl PriceContext {
    pub fn new() -> Self {
        Self {
            book: RwSignal::new(PriceBook::default()),
            next_seq: RwSignal::new(0),
        }
    }

    /// Kick off one tagged fetch.
    pub fn refresh(&self) {
        let book = self.book;
        let seq = self.next_seq.get_untracked() + 1;
        self.next_seq.set(seq);

        leptos::task::spawn_local(async move {
            let result = fetch_tokens(SUPPORTED_TOKENS).await;
            book.update(|current| apply_fetch_result(current, seq, result));
        });
    }

    /// Refresh on a fixed interval for as long as the app lives.
    pub fn start_polling(&self) {
        let context = *self;
        leptos::task::spawn_local(async move {
            loop {
                context.refresh();
                gloo_timers::future::TimeoutFuture::new(PRICE_UPDATE_INTERVAL_MS).await;
            }
        });
    }
}

impl Default for PriceContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_price_context() -> PriceContext {
    let context = PriceContext::new();
    provide_context(context);
    context
}

pub fn use_price_context() -> PriceContext {
    expect_context::<PriceContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(symbol: &str, price: f64) -> TokenInfo {
        TokenInfo {
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            usd_price: Some(price),
            balance: None,
            decimals: None,
            contract_address: None,
        }
    }

    #[test]
    fn fresh_response_applies() {
        let mut book = PriceBook::default();
        apply_fetch_result(&mut book, 1, Ok(vec![token("ETH", 3100.0)]));
        assert!(book.live);
        assert_eq!(book.get("ETH").unwrap().usd_price, Some(3100.0));
    }

    #[test]
    fn out_of_order_response_discarded() {
        let mut book = PriceBook::default();
        apply_fetch_result(&mut book, 2, Ok(vec![token("ETH", 3200.0)]));
        apply_fetch_result(&mut book, 1, Ok(vec![token("ETH", 3100.0)]));
        assert_eq!(book.get("ETH").unwrap().usd_price, Some(3200.0));
    }

    #[test]
    fn failure_keeps_cache_and_drops_live_flag() {
        let mut book = PriceBook::default();
        apply_fetch_result(&mut book, 1, Ok(vec![token("ETH", 3200.0)]));
        apply_fetch_result(&mut book, 2, Err("offline".to_string()));
        assert!(!book.live);
        assert_eq!(book.get("ETH").unwrap().usd_price, Some(3200.0));
    }

    #[test]
    fn failure_on_empty_cache_seeds_fallback() {
        let mut book = PriceBook::default();
        apply_fetch_result(&mut book, 1, Err("offline".to_string()));
        assert!(!book.live);
        assert!(book.get("USDC").is_some());
        assert!(book.get("ETH").is_some());
    }
}
