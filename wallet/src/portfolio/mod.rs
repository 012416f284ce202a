//! Wallet balances and the display pipeline built on top of them.
//!
//! Raw [`WalletBalance`] snapshots come from a [`BalanceSource`], get priced
//! against a [`PriceTable`](crate::price_feed::PriceTable) and end up as
//! [`ProcessedBalance`] rows ready for a renderer.

pub mod cache;
pub mod priority;
pub mod processor;
pub mod source;

pub use cache::BalanceCache;
pub use priority::{priority_of, SENTINEL_PRIORITY};
pub use processor::{enrich, process, retain_visible, sort_for_display};
pub use source::{BalanceSource, JsonFileBalanceSource, StaticBalanceSource};

use serde::{Deserialize, Serialize};

/// A holding of one currency on one blockchain, as reported by the wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletBalance {
    pub currency: String,
    pub amount: f64,
    pub blockchain: String,
}

impl WalletBalance {
    pub fn new(currency: impl Into<String>, amount: f64, blockchain: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            amount,
            blockchain: blockchain.into(),
        }
    }

    /// A small mixed wallet, handy when no balances file is given.
    pub fn sample() -> Vec<Self> {
        vec![
            Self::new("ETH", 2.5, "Ethereum"),
            Self::new("OSMO", 10.0, "Osmosis"),
            Self::new("ARB", 120.75, "Arbitrum"),
            Self::new("ZIL", 3400.0, "Zilliqa"),
            Self::new("NEO", 14.0, "Neo"),
            Self::new("XYZ", 1.0, "UnknownChain"),
            Self::new("ATOM", 0.0, "CosmosHub"),
        ]
    }
}

/// A wallet balance enriched with the fields the renderer needs.
///
/// Rows are rebuilt from scratch every time balances or prices change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedBalance {
    pub currency: String,
    pub amount: f64,
    pub blockchain: String,
    pub priority: i32,
    pub usd_value: f64,
    pub formatted_amount: String,
}

/// Total USD value of a set of processed rows.
pub fn total_usd_value(rows: &[ProcessedBalance]) -> f64 {
    rows.iter().map(|r| r.usd_value).sum()
}
