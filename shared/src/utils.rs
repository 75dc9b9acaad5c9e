//! # Shared Utility Functions
//!
//! Common helpers used by both the backend provider and the swap-web frontend.
//!
//! ## Symbol and Amount Formatting
//!
//! - [`normalize_symbol`] - Canonical (trimmed, uppercase) token symbol form
//! - [`format_token_amount`] - Format a token quantity to a token's display precision
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_token_amount, normalize_symbol};
//!
//! assert_eq!(normalize_symbol(" eth "), "ETH");
//! assert_eq!(format_token_amount(100.0 / 3500.0, Some(6)), "0.028571");
//! ```

/// Default number of fractional digits when a token's precision is unknown.
pub const DEFAULT_DISPLAY_DECIMALS: u32 = 2;

/// Normalize a token symbol to its canonical form (trimmed, uppercase).
///
/// All lookups key on the canonical form so that user input like `"eth"`
/// resolves to the same token as `"ETH"`.
///
/// # Examples
///
/// ```rust
/// use shared::utils::normalize_symbol;
///
/// assert_eq!(normalize_symbol("usdc"), "USDC");
/// assert_eq!(normalize_symbol("  wBtc "), "WBTC");
/// ```
pub fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}

/// Format a token quantity to `decimals` fractional digits.
///
/// A missing precision falls back to [`DEFAULT_DISPLAY_DECIMALS`]. An explicit
/// precision of 0 is honored (whole-unit tokens render without a fraction).
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_token_amount;
///
/// assert_eq!(format_token_amount(0.0285714285, Some(6)), "0.028571");
/// assert_eq!(format_token_amount(100.0, None), "100.00");
/// assert_eq!(format_token_amount(3.7, Some(0)), "4");
/// ```
pub fn format_token_amount(value: f64, decimals: Option<u32>) -> String {
    let precision = decimals.unwrap_or(DEFAULT_DISPLAY_DECIMALS) as usize;
    format!("{:.prec$}", value, prec = precision)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_symbol() {
        assert_eq!(normalize_symbol("eth"), "ETH");
        assert_eq!(normalize_symbol(" USDC "), "USDC");
        assert_eq!(normalize_symbol("wBtc"), "WBTC");
    }

    #[test]
    fn test_format_token_amount() {
        assert_eq!(format_token_amount(100.0 / 3500.0, Some(6)), "0.028571");
        assert_eq!(format_token_amount(0.5, None), "0.50");
        assert_eq!(format_token_amount(0.0, Some(4)), "0.0000");
    }

    #[test]
    fn test_format_token_amount_zero_decimals() {
        assert_eq!(format_token_amount(12.0, Some(0)), "12");
    }
}
