//! # Mock Price Source
//!
//! Deterministic price and balance data for the demo. Prices fluctuate
//! around fixed base values, seeded from wall-clock time so repeated polls
//! see small movements while two requests in the same window agree.

use shared::{normalize_symbol, TokenInfo};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};

/// Static seed data for one supported token.
struct TokenSeed {
    symbol: &'static str,
    name: &'static str,
    base_price: f64,
    balance: f64,
    decimals: u32,
    contract_address: Option<&'static str>,
}

const TOKEN_SEEDS: &[TokenSeed] = &[
    TokenSeed {
        symbol: "USDC",
        name: "USD Coin",
        base_price: 1.0,
        balance: 2500.0,
        decimals: 2,
        contract_address: Some("0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"),
    },
    TokenSeed {
        symbol: "USDT",
        name: "Tether USD",
        base_price: 1.0,
        balance: 1000.0,
        decimals: 2,
        contract_address: Some("0xdac17f958d2ee523a2206206994597c13d831ec7"),
    },
    TokenSeed {
        symbol: "ETH",
        name: "Ethereum",
        base_price: 3100.0,
        balance: 2.5,
        decimals: 6,
        contract_address: None,
    },
    TokenSeed {
        symbol: "WBTC",
        name: "Wrapped Bitcoin",
        base_price: 64250.0,
        balance: 0.12,
        decimals: 8,
        contract_address: Some("0x2260fac5e5542a773aa44fbcfedf7c193bc2c599"),
    },
    TokenSeed {
        symbol: "SOL",
        name: "Solana",
        base_price: 145.50,
        balance: 40.0,
        decimals: 4,
        contract_address: None,
    },
    TokenSeed {
        symbol: "LINK",
        name: "Chainlink",
        base_price: 18.40,
        balance: 75.0,
        decimals: 4,
        contract_address: Some("0x514910771af9ca656af840dff83e8264ecf986ca"),
    },
];

/// Stablecoins move within a much tighter band than volatile assets.
const STABLE_VOLATILITY: f64 = 0.001;
const VOLATILE_VOLATILITY: f64 = 0.02;

pub struct PriceSource;

impl PriceSource {
    pub fn new() -> Self {
        Self
    }

    /// Symbols this provider knows about, in listing order.
    pub fn supported_symbols(&self) -> Vec<&'static str> {
        TOKEN_SEEDS.iter().map(|s| s.symbol).collect()
    }

    /// Current info for one token, or `None` for an unknown symbol.
    pub fn token_info(&self, symbol: &str) -> Option<TokenInfo> {
        let canonical = normalize_symbol(symbol);
        let seed = TOKEN_SEEDS.iter().find(|s| s.symbol == canonical)?;
        let price = self.fluctuated_price(seed);

        debug!("Mock price for {}: ${:.6}", seed.symbol, price);

        Some(TokenInfo {
            symbol: seed.symbol.to_string(),
            name: seed.name.to_string(),
            usd_price: Some(price),
            balance: Some(seed.balance),
            decimals: Some(seed.decimals),
            contract_address: seed.contract_address.map(str::to_string),
        })
    }

    /// Resolve a batch of symbols, skipping unknown entries.
    pub fn token_infos(&self, symbols: &[&str]) -> Vec<TokenInfo> {
        let mut infos = Vec::with_capacity(symbols.len());
        for symbol in symbols {
            match self.token_info(symbol) {
                Some(info) => infos.push(info),
                None => warn!("Unknown symbol: {}, skipping", symbol),
            }
        }
        infos
    }

    /// Base price nudged by a deterministic, time-seeded fluctuation.
    fn fluctuated_price(&self, seed: &TokenSeed) -> f64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_else(|e| {
                warn!("System time before Unix epoch: {}. Using 0 for price seed.", e);
                0
            });

        let mix = (now / 2) + seed.symbol.len() as u64;
        let fluctuation_factor = ((mix * 16807) % 100) as f64 / 100.0;

        let volatility = if seed.base_price == 1.0 {
            STABLE_VOLATILITY
        } else {
            VOLATILE_VOLATILITY
        };

        let change_percent = (fluctuation_factor - 0.5) * 2.0 * volatility;
        seed.base_price * (1.0 + change_percent)
    }
}

impl Default for PriceSource {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_symbol_has_positive_price() {
        let source = PriceSource::new();
        let info = source.token_info("ETH").unwrap();
        assert!(info.usd_price.unwrap() > 0.0);
        assert_eq!(info.decimals, Some(6));
        assert_eq!(info.balance, Some(2.5));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let source = PriceSource::new();
        assert_eq!(source.token_info(" wbtc ").unwrap().symbol, "WBTC");
    }

    #[test]
    fn unknown_symbol_is_none() {
        let source = PriceSource::new();
        assert!(source.token_info("XYZ").is_none());
    }

    #[test]
    fn batch_skips_unknown_symbols() {
        let source = PriceSource::new();
        let infos = source.token_infos(&["USDC", "XYZ", "ETH"]);
        let symbols: Vec<_> = infos.iter().map(|i| i.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["USDC", "ETH"]);
    }

    #[test]
    fn stablecoin_band_is_tight() {
        let source = PriceSource::new();
        let usdc = source.token_info("USDC").unwrap().usd_price.unwrap();
        assert!((usdc - 1.0).abs() <= STABLE_VOLATILITY + 1e-9);

        let eth = source.token_info("ETH").unwrap().usd_price.unwrap();
        assert!((eth - 3100.0).abs() <= 3100.0 * VOLATILE_VOLATILITY + 1e-9);
    }
}
