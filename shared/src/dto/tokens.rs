//! Token metadata DTOs and the generic response envelope.
//!
//! Every provider endpoint wraps its payload in [`ApiResponse`]; callers must
//! branch on `success` before reading `data`.

use serde::{Deserialize, Serialize};

/// Response envelope returned by every provider endpoint.
///
/// `data` is only populated when `success` is true; `error` only when it is
/// false. Transport-level failures never reach this type; the client maps
/// those to fallback data before core logic sees them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }

    /// Payload if the call succeeded, `None` otherwise.
    pub fn into_data(self) -> Option<T> {
        if self.success {
            self.data
        } else {
            None
        }
    }
}

/// A tradeable asset as reported by the price/balance provider.
///
/// `usd_price` absent (or non-positive) means "price unavailable": consumers
/// must treat it as unknown and fall back, never divide by it. `balance` absent
/// means the holding is unknown and validation treats it as zero. `decimals`
/// absent means display code uses its default precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenInfo {
    pub symbol: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usd_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,
}

impl TokenInfo {
    /// Live USD price, if the provider reported a usable one.
    pub fn live_price(&self) -> Option<f64> {
        self.usd_price.filter(|p| p.is_finite() && *p > 0.0)
    }

    /// Known balance, defaulting to zero when the provider omitted it.
    pub fn balance_or_zero(&self) -> f64 {
        self.balance.filter(|b| b.is_finite()).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_roundtrip_success() {
        let resp = ApiResponse::ok(TokenInfo {
            symbol: "ETH".to_string(),
            name: "Ethereum".to_string(),
            usd_price: Some(3100.0),
            balance: Some(2.5),
            decimals: Some(6),
            contract_address: None,
        });
        let json = serde_json::to_string(&resp).unwrap();
        assert!(!json.contains("contract_address"));
        let back: ApiResponse<TokenInfo> = serde_json::from_str(&json).unwrap();
        assert!(back.success);
        assert_eq!(back.into_data().unwrap().symbol, "ETH");
    }

    #[test]
    fn envelope_failure_hides_data() {
        let resp: ApiResponse<TokenInfo> = ApiResponse::err("unknown token symbol: XYZ");
        assert!(!resp.success);
        assert!(resp.into_data().is_none());
    }

    #[test]
    fn live_price_rejects_zero_and_missing() {
        let mut info = TokenInfo {
            symbol: "TEST".to_string(),
            name: "Test".to_string(),
            usd_price: None,
            balance: None,
            decimals: None,
            contract_address: None,
        };
        assert_eq!(info.live_price(), None);
        info.usd_price = Some(0.0);
        assert_eq!(info.live_price(), None);
        info.usd_price = Some(1.5);
        assert_eq!(info.live_price(), Some(1.5));
        assert_eq!(info.balance_or_zero(), 0.0);
    }
}
