//! Swap validation: amount well-formedness and balance sufficiency.

use crate::core::quote::parse_amount;
use shared::TokenInfo;
use std::collections::HashMap;

/// True iff the string parses to a finite number strictly greater than zero.
/// Empty input, non-numeric text, zero, and negatives are all invalid.
pub fn is_valid_usd_amount(usd_amount: &str) -> bool {
    parse_amount(usd_amount).is_some_and(|v| v > 0.0)
}

/// True iff the requested source amount exceeds the known balance.
///
/// An unparseable amount is NOT flagged insufficient (unknown amount stays
/// conservative). A token missing from the map, or one with no reported
/// balance, counts as a balance of zero, so any positive request is flagged.
pub fn has_insufficient_balance(
    source_token_amount: &str,
    source_symbol: &str,
    tokens: &HashMap<String, TokenInfo>,
) -> bool {
    let Some(amount) = parse_amount(source_token_amount) else {
        return false;
    };

    let balance = tokens
        .get(source_symbol)
        .map(TokenInfo::balance_or_zero)
        .unwrap_or(0.0);

    amount > balance
}

/// Composite check gating swap execution.
pub fn is_swap_valid(
    usd_amount: &str,
    source_token_amount: &str,
    source_symbol: &str,
    tokens: &HashMap<String, TokenInfo>,
    currently_executing: bool,
) -> bool {
    is_valid_usd_amount(usd_amount)
        && !has_insufficient_balance(source_token_amount, source_symbol, tokens)
        && !currently_executing
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens_with_balance(symbol: &str, balance: Option<f64>) -> HashMap<String, TokenInfo> {
        let mut map = HashMap::new();
        map.insert(
            symbol.to_string(),
            TokenInfo {
                symbol: symbol.to_string(),
                name: symbol.to_string(),
                usd_price: Some(1.0),
                balance,
                decimals: Some(2),
                contract_address: None,
            },
        );
        map
    }

    #[test]
    fn valid_usd_amount() {
        assert!(is_valid_usd_amount("100"));
        assert!(is_valid_usd_amount("0.01"));
        assert!(is_valid_usd_amount(" 42.5 "));

        assert!(!is_valid_usd_amount(""));
        assert!(!is_valid_usd_amount("abc"));
        assert!(!is_valid_usd_amount("0"));
        assert!(!is_valid_usd_amount("-10"));
        assert!(!is_valid_usd_amount("inf"));
        assert!(!is_valid_usd_amount("NaN"));
    }

    #[test]
    fn insufficient_balance_boundaries() {
        let tokens = tokens_with_balance("ETH", Some(100.0));
        assert!(has_insufficient_balance("100.5", "ETH", &tokens));
        assert!(!has_insufficient_balance("99.9", "ETH", &tokens));
        assert!(!has_insufficient_balance("100", "ETH", &tokens));
    }

    #[test]
    fn unparseable_amount_not_flagged() {
        let tokens = tokens_with_balance("ETH", Some(100.0));
        assert!(!has_insufficient_balance("", "ETH", &tokens));
        assert!(!has_insufficient_balance("garbage", "ETH", &tokens));
    }

    #[test]
    fn missing_balance_counts_as_zero() {
        let tokens = tokens_with_balance("ETH", None);
        assert!(has_insufficient_balance("0.001", "ETH", &tokens));

        let empty = HashMap::new();
        assert!(has_insufficient_balance("1", "ETH", &empty));
    }

    #[test]
    fn composite_validity() {
        let tokens = tokens_with_balance("ETH", Some(10.0));
        assert!(is_swap_valid("100", "5", "ETH", &tokens, false));
        assert!(!is_swap_valid("100", "5", "ETH", &tokens, true));
        assert!(!is_swap_valid("", "5", "ETH", &tokens, false));
        assert!(!is_swap_valid("100", "50", "ETH", &tokens, false));
    }
}
