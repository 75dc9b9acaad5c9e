//! Quote computation: USD amount + token price data -> displayed amounts
//! and exchange rate.

use shared::{format_token_amount, TokenInfo};

/// A derived quote. Recomputed on every relevant input change, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub source_token_amount: String,
    pub target_token_amount: String,
    pub exchange_rate: f64,
    /// True when either side's live price was unavailable and the 1.0
    /// substitute was used. Display code renders an "Estimated" badge off
    /// this rather than hiding the degradation.
    pub estimated: bool,
}

/// Parse a user-entered decimal amount. Strict: the whole trimmed string must
/// be a finite number, so "100abc" is rejected rather than read as 100.
pub fn parse_amount(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Price used for conversion: the live price, or 1.0 when unavailable.
///
/// The 1.0 substitute keeps every quote finite but can silently misprice an
/// unknown token; [`Quote::estimated`] is the caller's signal that it fired.
fn effective_price(info: Option<&TokenInfo>) -> f64 {
    info.and_then(TokenInfo::live_price).unwrap_or(1.0)
}

/// Compute token amounts and the cross rate for a USD amount and token pair.
///
/// An unparseable or non-positive amount yields `"0"` for both sides; the
/// exchange rate is computed from prices alone and stays meaningful either
/// way. Pure: identical inputs always produce an identical quote.
pub fn compute_quote(
    usd_amount: &str,
    source: Option<&TokenInfo>,
    target: Option<&TokenInfo>,
) -> Quote {
    let usd = parse_amount(usd_amount).filter(|v| *v > 0.0);

    let amount_for = |info: Option<&TokenInfo>| match usd {
        Some(value) => {
            format_token_amount(value / effective_price(info), info.and_then(|t| t.decimals))
        }
        None => "0".to_string(),
    };

    let source_live = source.and_then(TokenInfo::live_price).is_some();
    let target_live = target.and_then(TokenInfo::live_price).is_some();

    Quote {
        source_token_amount: amount_for(source),
        target_token_amount: amount_for(target),
        exchange_rate: effective_price(source) / effective_price(target),
        estimated: !source_live || !target_live,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(symbol: &str, price: Option<f64>, decimals: Option<u32>) -> TokenInfo {
        TokenInfo {
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            usd_price: price,
            balance: None,
            decimals,
            contract_address: None,
        }
    }

    #[test]
    fn invalid_amounts_zero_both_sides() {
        let eth = token("ETH", Some(3500.0), Some(6));
        let usdc = token("USDC", Some(1.0), Some(2));
        for input in ["", "abc", "0", "-5", "100abc", "NaN", "inf"] {
            let quote = compute_quote(input, Some(&usdc), Some(&eth));
            assert_eq!(quote.source_token_amount, "0", "input {:?}", input);
            assert_eq!(quote.target_token_amount, "0", "input {:?}", input);
        }
    }

    #[test]
    fn rate_computed_even_for_invalid_amount() {
        let eth = token("ETH", Some(3500.0), Some(6));
        let usdc = token("USDC", Some(1.0), Some(2));
        let quote = compute_quote("", Some(&eth), Some(&usdc));
        assert_eq!(quote.exchange_rate, 3500.0);
        assert!(!quote.estimated);
    }

    #[test]
    fn converts_usd_to_token_amounts() {
        let eth = token("ETH", Some(3500.0), Some(6));
        let usdc = token("USDC", Some(1.0), Some(2));
        let quote = compute_quote("100", Some(&usdc), Some(&eth));
        assert_eq!(quote.source_token_amount, "100.00");
        assert_eq!(quote.target_token_amount, "0.028571");
        assert!((quote.exchange_rate - 1.0 / 3500.0).abs() < 1e-12);
    }

    #[test]
    fn missing_price_falls_back_to_one() {
        let unknown = token("XYZ", None, None);
        let eth = token("ETH", Some(3500.0), Some(6));
        let quote = compute_quote("50", Some(&unknown), Some(&eth));
        // $1 substitute: 50 units at the default 2-digit precision
        assert_eq!(quote.source_token_amount, "50.00");
        assert_eq!(quote.exchange_rate, 1.0 / 3500.0);
        assert!(quote.estimated);
    }

    #[test]
    fn zero_price_treated_as_unavailable() {
        let dead = token("DEAD", Some(0.0), Some(4));
        let quote = compute_quote("10", Some(&dead), None);
        assert_eq!(quote.source_token_amount, "10.0000");
        assert_eq!(quote.exchange_rate, 1.0);
        assert!(quote.estimated);
    }

    #[test]
    fn rate_always_finite_and_positive() {
        let cases = [
            (None, None),
            (Some(3500.0), None),
            (None, Some(0.5)),
            (Some(0.0), Some(0.0)),
        ];
        for (src, tgt) in cases {
            let source = token("A", src, None);
            let target = token("B", tgt, None);
            let quote = compute_quote("1", Some(&source), Some(&target));
            assert!(quote.exchange_rate.is_finite());
            assert!(quote.exchange_rate > 0.0);
        }
    }

    #[test]
    fn absent_token_info_handled() {
        let quote = compute_quote("25", None, None);
        assert_eq!(quote.source_token_amount, "25.00");
        assert_eq!(quote.target_token_amount, "25.00");
        assert_eq!(quote.exchange_rate, 1.0);
        assert!(quote.estimated);
    }

    #[test]
    fn pure_for_identical_inputs() {
        let eth = token("ETH", Some(3104.27), Some(6));
        let usdc = token("USDC", Some(0.9998), Some(2));
        let a = compute_quote("123.45", Some(&usdc), Some(&eth));
        let b = compute_quote("123.45", Some(&usdc), Some(&eth));
        assert_eq!(a, b);
    }
}
