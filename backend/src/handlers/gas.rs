use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use shared::{ApiResponse, GasEstimateResponse};
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
pub struct GasQuery {
    /// Chain identifier. The mock serves the same estimate for every network.
    pub network: Option<String>,
}

/// Current gas price and estimated swap cost.
pub async fn get_gas_estimate(
    State(state): State<AppState>,
    Query(query): Query<GasQuery>,
) -> (StatusCode, Json<ApiResponse<GasEstimateResponse>>) {
    info!(
        "[GAS] Estimate request for {}",
        query.network.as_deref().unwrap_or("mainnet")
    );

    let estimate = state.gas.estimate();
    debug!(
        "[GAS] {:.2} gwei, swap cost {:.6} ETH",
        estimate.gas_price_gwei, estimate.estimated_costs.token_swap.cost_eth
    );

    (StatusCode::OK, Json(ApiResponse::ok(estimate)))
}
