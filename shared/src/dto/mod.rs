//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures used for communication between
//! the swap frontend and the mock pricing backend via the REST API.
//!
//! ## Module Organization
//!
//! - [`tokens`] - Token metadata, USD prices, balances, and the response envelope
//! - [`gas`] - Gas price and estimated swap cost DTOs
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json` for JSON serialization:
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **All types**: Implement both `Serialize` and `Deserialize`
//!
//! ## Example JSON Communication
//!
//! ```text
//! GET /api/tokens/ETH
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "success": true,
//!   "data": {
//!     "symbol": "ETH",
//!     "name": "Ethereum",
//!     "usd_price": 3104.27,
//!     "balance": 2.5,
//!     "decimals": 6
//!   }
//! }
//! ```

pub mod gas;
pub mod health;
pub mod tokens;

pub use gas::*;
pub use health::*;
pub use tokens::*;
