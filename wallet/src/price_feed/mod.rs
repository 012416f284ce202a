//! Token prices.
//!
//! A [`PriceSource`] yields the usable [`Token`]s of a price list; the
//! [`PriceTable`] view of them is what balance processing consumes.

pub mod file;
pub mod token;

pub use file::JsonFilePriceSource;
pub use token::{icon_url, parse_feed, price_table, RawToken, Token};

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// Currency symbol → USD price. Absent symbols are priced at zero by consumers.
pub type PriceTable = HashMap<String, f64>;

#[async_trait]
pub trait PriceSource: Send + Sync {
    /// All tokens that carry a usable price, in feed order.
    async fn tokens(&self) -> Result<Vec<Token>>;

    /// The tokens as a lookup table. Later duplicates win.
    async fn prices(&self) -> Result<PriceTable> {
        Ok(price_table(&self.tokens().await?))
    }
}

/// Serves a fixed list of tokens.
#[derive(Debug, Clone, Default)]
pub struct StaticPriceSource {
    tokens: Vec<Token>,
}

impl StaticPriceSource {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// A handful of prices matching [`WalletBalance::sample`](crate::portfolio::WalletBalance::sample).
    pub fn sample() -> Self {
        Self::new(vec![
            Token::new("ETH", 2000.0),
            Token::new("OSMO", 1.0),
            Token::new("ARB", 0.75),
            Token::new("ZIL", 0.02),
            Token::new("NEO", 12.5),
            Token::new("XYZ", 5.0),
            Token::new("USDC", 1.0),
        ])
    }
}

#[async_trait]
impl PriceSource for StaticPriceSource {
    async fn tokens(&self) -> Result<Vec<Token>> {
        Ok(self.tokens.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_prices() {
        let source = StaticPriceSource::new(vec![Token::new("ETH", 2000.0), Token::new("OSMO", 1.0)]);
        let prices = source.prices().await.unwrap();

        assert_eq!(prices.len(), 2);
        assert_eq!(prices["ETH"], 2000.0);
        assert_eq!(prices.get("BTC"), None);
    }
}
