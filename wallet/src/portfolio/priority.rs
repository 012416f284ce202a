//! Blockchain display priority.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Priority given to any blockchain not listed in [`BLOCKCHAIN_PRIORITY`].
/// Rows carrying it are never displayed.
pub const SENTINEL_PRIORITY: i32 = -99;

/// Known blockchains and their rank. Higher sorts first.
pub const BLOCKCHAIN_PRIORITY: &[(&str, i32)] = &[
    ("Osmosis", 100),
    ("Ethereum", 50),
    ("Arbitrum", 30),
    ("Zilliqa", 20),
    ("Neo", 20),
];

static PRIORITY_TABLE: LazyLock<HashMap<&'static str, i32>> =
    LazyLock::new(|| BLOCKCHAIN_PRIORITY.iter().copied().collect());

/// Look up the priority of a blockchain by its exact (case-sensitive) name.
pub fn priority_of(blockchain: &str) -> i32 {
    PRIORITY_TABLE
        .get(blockchain)
        .copied()
        .unwrap_or(SENTINEL_PRIORITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_chains() {
        assert_eq!(priority_of("Osmosis"), 100);
        assert_eq!(priority_of("Ethereum"), 50);
        assert_eq!(priority_of("Arbitrum"), 30);
        assert_eq!(priority_of("Zilliqa"), 20);
        assert_eq!(priority_of("Neo"), 20);
    }

    #[test]
    fn unknown_chain_gets_sentinel() {
        assert_eq!(priority_of("CosmosHub"), SENTINEL_PRIORITY);
        assert_eq!(priority_of(""), SENTINEL_PRIORITY);
        // lookup is exact
        assert_eq!(priority_of("osmosis"), SENTINEL_PRIORITY);
    }

    #[test]
    fn every_known_chain_ranks_above_sentinel() {
        for (_, priority) in BLOCKCHAIN_PRIORITY {
            assert!(*priority > SENTINEL_PRIORITY);
        }
    }
}
