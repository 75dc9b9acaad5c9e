//! # Mock Gas Oracle
//!
//! Gas price estimates for the simulated network, fluctuating around a
//! configurable base the same way the price source does.

use shared::GasEstimateResponse;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

/// Gas units a token swap consumes on the simulated network.
pub const SWAP_GAS_UNITS: u64 = 150_000;

const GAS_VOLATILITY: f64 = 0.15;

pub struct GasOracle {
    base_gwei: f64,
}

impl GasOracle {
    pub fn new(base_gwei: f64) -> Self {
        Self { base_gwei }
    }

    /// Current estimate, including the derived token-swap cost.
    pub fn estimate(&self) -> GasEstimateResponse {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        let fluctuation_factor = (((now / 3) * 16807) % 100) as f64 / 100.0;
        let change_percent = (fluctuation_factor - 0.5) * 2.0 * GAS_VOLATILITY;
        let gwei = self.base_gwei * (1.0 + change_percent);

        debug!("Mock gas price: {:.2} gwei", gwei);
        GasEstimateResponse::from_gwei(gwei, SWAP_GAS_UNITS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_stays_within_band() {
        let oracle = GasOracle::new(20.0);
        let est = oracle.estimate();
        assert!(est.gas_price_gwei >= 20.0 * (1.0 - GAS_VOLATILITY) - 1e-9);
        assert!(est.gas_price_gwei <= 20.0 * (1.0 + GAS_VOLATILITY) + 1e-9);
        assert!(est.estimated_costs.token_swap.cost_eth > 0.0);
    }
}
