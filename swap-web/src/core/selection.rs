//! Source/target token selection.

use crate::utils::constants::{DEFAULT_SOURCE_TOKEN, DEFAULT_TARGET_TOKEN};
use shared::normalize_symbol;

/// Which token is being sold (source) and bought (target).
///
/// Invariant: the two symbols are never equal after any operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSelection {
    source: String,
    target: String,
}

impl TokenSelection {
    /// Build a selection, repairing an equal pair (e.g. from a corrupted
    /// store) by moving the target to the alternate default.
    pub fn new(source: impl AsRef<str>, target: impl AsRef<str>) -> Self {
        let source = normalize_symbol(source.as_ref());
        let mut target = normalize_symbol(target.as_ref());
        if source == target {
            target = if source == DEFAULT_TARGET_TOKEN {
                DEFAULT_SOURCE_TOKEN.to_string()
            } else {
                DEFAULT_TARGET_TOKEN.to_string()
            };
        }
        Self { source, target }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Atomically exchange source and target. Involutive.
    pub fn swap_positions(&mut self) {
        std::mem::swap(&mut self.source, &mut self.target);
    }

    /// Apply a token pick.
    ///
    /// Picking the current source or the current target swaps the roles;
    /// picking any other symbol claims the source role, leaving the target
    /// unchanged. The role swap on collision is what keeps source != target.
    pub fn select(&mut self, symbol: &str) {
        let symbol = normalize_symbol(symbol);
        if symbol == self.source || symbol == self.target {
            self.swap_positions();
        } else {
            self.source = symbol;
        }
    }
}

impl Default for TokenSelection {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_TOKEN, DEFAULT_TARGET_TOKEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_positions_is_involutive() {
        let mut selection = TokenSelection::new("USDC", "ETH");
        let original = selection.clone();
        selection.swap_positions();
        assert_eq!(selection.source(), "ETH");
        assert_eq!(selection.target(), "USDC");
        selection.swap_positions();
        assert_eq!(selection, original);
    }

    #[test]
    fn selecting_target_swaps_roles() {
        let mut selection = TokenSelection::new("USDC", "ETH");
        selection.select("ETH");
        assert_eq!(selection.source(), "ETH");
        assert_eq!(selection.target(), "USDC");
    }

    #[test]
    fn selecting_source_swaps_roles() {
        let mut selection = TokenSelection::new("USDC", "ETH");
        selection.select("USDC");
        assert_eq!(selection.source(), "ETH");
        assert_eq!(selection.target(), "USDC");
    }

    #[test]
    fn selecting_third_token_claims_source() {
        let mut selection = TokenSelection::new("USDC", "ETH");
        selection.select("WBTC");
        assert_eq!(selection.source(), "WBTC");
        assert_eq!(selection.target(), "ETH");
    }

    #[test]
    fn roles_never_collide() {
        let mut selection = TokenSelection::new("USDC", "ETH");
        for pick in ["ETH", "ETH", "WBTC", "USDC", "SOL", "SOL"] {
            selection.select(pick);
            assert_ne!(selection.source(), selection.target(), "after {}", pick);
        }
    }

    #[test]
    fn equal_pair_is_repaired() {
        let selection = TokenSelection::new("ETH", "ETH");
        assert_eq!(selection.source(), "ETH");
        assert_eq!(selection.target(), "USDC");

        let selection = TokenSelection::new("USDC", "usdc");
        assert_eq!(selection.source(), "USDC");
        assert_eq!(selection.target(), "ETH");
    }

    #[test]
    fn symbols_normalized() {
        let mut selection = TokenSelection::new(" usdc", "eth ");
        assert_eq!(selection.source(), "USDC");
        selection.select("wbtc");
        assert_eq!(selection.source(), "WBTC");
    }
}
