//! Gas price and swap cost estimate DTOs.

use serde::{Deserialize, Serialize};

/// Gas estimate for the selected network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasEstimateResponse {
    pub gas_price_gwei: f64,
    pub estimated_costs: EstimatedCosts,
}

/// Per-operation cost estimates derived from the current gas price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatedCosts {
    pub token_swap: SwapCostEstimate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapCostEstimate {
    pub cost_eth: f64,
}

impl GasEstimateResponse {
    /// Build an estimate from a gas price and the fixed gas units a token
    /// swap consumes on the simulated network.
    pub fn from_gwei(gas_price_gwei: f64, swap_gas_units: u64) -> Self {
        let cost_eth = gas_price_gwei * swap_gas_units as f64 / 1_000_000_000.0;
        Self {
            gas_price_gwei,
            estimated_costs: EstimatedCosts {
                token_swap: SwapCostEstimate { cost_eth },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_cost_scales_with_gas_price() {
        // 20 gwei * 150_000 units = 0.003 ETH
        let est = GasEstimateResponse::from_gwei(20.0, 150_000);
        assert!((est.estimated_costs.token_swap.cost_eth - 0.003).abs() < 1e-12);
    }
}
