use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use shared::{ApiResponse, TokenInfo};
use tracing::{debug, info, warn};

#[derive(Debug, Deserialize)]
pub struct TokensQuery {
    /// Comma-separated symbol list; omitted means "all supported tokens".
    pub symbols: Option<String>,
    /// Chain identifier. The mock serves the same book for every network.
    pub network: Option<String>,
}

/// Get info for a single token by symbol.
pub async fn get_token(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> (StatusCode, Json<ApiResponse<TokenInfo>>) {
    info!("[TOKENS] Info request for {}", symbol);

    match state.prices.token_info(&symbol) {
        Some(info) => {
            debug!(
                "[TOKENS] {} = ${:.6}",
                info.symbol,
                info.usd_price.unwrap_or(0.0)
            );
            (StatusCode::OK, Json(ApiResponse::ok(info)))
        }
        None => {
            warn!("[TOKENS] Unknown symbol: {}", symbol);
            (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::err(format!("unknown token symbol: {}", symbol))),
            )
        }
    }
}

/// Get info for a batch of tokens in a single call.
pub async fn list_tokens(
    State(state): State<AppState>,
    Query(query): Query<TokensQuery>,
) -> (StatusCode, Json<ApiResponse<Vec<TokenInfo>>>) {
    let network = query.network.as_deref().unwrap_or("mainnet");

    let infos = match &query.symbols {
        Some(symbols) => {
            let requested: Vec<&str> = symbols
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect();
            info!(
                "[TOKENS] Batch request for {} symbols on {}",
                requested.len(),
                network
            );
            state.prices.token_infos(&requested)
        }
        None => {
            info!("[TOKENS] Listing all supported tokens on {}", network);
            let all = state.prices.supported_symbols();
            state.prices.token_infos(&all)
        }
    };

    if infos.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::err("no valid symbols requested")),
        );
    }

    debug!("[TOKENS] Returning {} tokens", infos.len());
    (StatusCode::OK, Json(ApiResponse::ok(infos)))
}
