//! # Formatting Utilities for Swap Web
//!
//! Number formatting specific to the swap UI. Token quantities use
//! [`shared::utils::format_token_amount`]; these helpers cover USD values and
//! exchange rates.

/// Format a number with commas (e.g., 1234567.89 -> "1,234,567.89")
///
/// # Arguments
///
/// * `value` - The number to format
/// * `decimals` - Number of decimal places to show
///
/// # Examples
///
/// ```rust
/// use swap_web::utils::format::format_number;
///
/// assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
/// assert_eq!(format_number(100.0, 2), "100.00");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value, prec = decimals);
    let parts: Vec<&str> = formatted.split('.').collect();

    let integer_part = parts[0];
    let decimal_part = if parts.len() > 1 { parts[1] } else { "" };

    // Add commas to integer part
    let mut result = String::new();
    for (i, ch) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }

    let integer_with_commas: String = result.chars().rev().collect();

    if decimal_part.is_empty() {
        integer_with_commas
    } else {
        format!("{}.{}", integer_with_commas, decimal_part)
    }
}

/// Format an exchange rate for display.
///
/// Large rates get two digits, small ones keep six so dust rates like
/// 1 USDC -> ETH stay readable.
pub fn format_rate(rate: f64) -> String {
    if rate >= 1.0 {
        format_number(rate, 2)
    } else {
        format!("{:.6}", rate)
    }
}

/// Format an ETH-denominated gas cost.
pub fn format_eth_cost(cost_eth: f64) -> String {
    format!("{:.6} ETH", cost_eth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
        assert_eq!(format_number(100.0, 2), "100.00");
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(3500.0), "3,500.00");
        assert_eq!(format_rate(1.0 / 3500.0), "0.000286");
    }

    #[test]
    fn test_format_eth_cost() {
        assert_eq!(format_eth_cost(0.003), "0.003000 ETH");
    }
}
