//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the frontend (swap-web) and the
//! mock pricing backend. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::tokens`]**: Token metadata, prices, balances, response envelope
//!   - **[`dto::gas`]**: Gas price and swap cost estimates
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::normalize_symbol`]**: Canonical token symbol form
//!   - **[`utils::format_token_amount`]**: Fixed-precision amount formatting
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case** in Rust, which maps to **snake_case** in JSON by default
//! - Optional fields are omitted from JSON when `None` (using `#[serde(skip_serializing_if = "Option::is_none")]`)
//! - All structs implement both `Serialize` and `Deserialize` for bidirectional communication
//!
//! ## Usage in Backend
//!
//! ```rust,no_run
//! use shared::dto::tokens::{ApiResponse, TokenInfo};
//!
//! fn token_payload(info: TokenInfo) -> ApiResponse<TokenInfo> {
//!     ApiResponse::ok(info)
//! }
//! ```
//!
//! ## Usage in Frontend
//!
//! Consumers must branch on `success` before reading `data`:
//!
//! ```rust
//! use shared::dto::tokens::{ApiResponse, TokenInfo};
//!
//! let body = r#"{"success":false,"error":"unknown token symbol: XYZ"}"#;
//! let resp: ApiResponse<TokenInfo> = serde_json::from_str(body).unwrap();
//! assert!(!resp.success);
//! assert!(resp.data.is_none());
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
pub use utils::*;
