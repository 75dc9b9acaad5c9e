//! Application constants

pub const API_BASE: &str = "http://127.0.0.1:3001";

/// Tokens offered in the picker. The provider may know more; these are the
/// ones the demo surfaces.
pub const SUPPORTED_TOKENS: &[&str] = &["USDC", "USDT", "ETH", "WBTC", "SOL", "LINK"];

// Seed values for a fresh profile
pub const DEFAULT_SOURCE_TOKEN: &str = "USDC";
pub const DEFAULT_TARGET_TOKEN: &str = "ETH";
pub const DEFAULT_USD_AMOUNT: &str = "100";

// Simulated swap timing
pub const SWAP_EXECUTE_MS: u32 = 1500;
pub const SWAP_COMPLETE_RESET_MS: u32 = 3000;

// UI constants
pub const PRICE_UPDATE_INTERVAL_MS: u32 = 5000;
