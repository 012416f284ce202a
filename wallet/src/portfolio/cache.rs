use super::{process, ProcessedBalance, WalletBalance};
use crate::price_feed::PriceTable;
use tracing::debug;

/// Memoizes [`process`] on its two inputs.
///
/// Holds the last balances, prices and output. A call with inputs equal by
/// value to the previous ones returns the cached rows; anything else rebuilds
/// the whole output.
#[derive(Debug, Default)]
pub struct BalanceCache {
    entry: Option<CacheEntry>,
    recomputations: usize,
}

#[derive(Debug)]
struct CacheEntry {
    balances: Vec<WalletBalance>,
    prices: PriceTable,
    output: Vec<ProcessedBalance>,
}

impl BalanceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the processed rows for these inputs, recomputing only on change.
    pub fn get(&mut self, balances: &[WalletBalance], prices: &PriceTable) -> &[ProcessedBalance] {
        self.refresh(balances, prices);
        self.output()
    }

    /// Bring the cache up to date with these inputs.
    /// Returns `true` when the output had to be rebuilt.
    pub fn refresh(&mut self, balances: &[WalletBalance], prices: &PriceTable) -> bool {
        let fresh = matches!(
            &self.entry,
            Some(entry) if entry.balances.as_slice() == balances && &entry.prices == prices
        );
        if fresh {
            return false;
        }

        self.recomputations += 1;
        debug!(
            "balance cache miss, recomputing (#{}) for {} balances",
            self.recomputations,
            balances.len()
        );
        self.entry = Some(CacheEntry {
            balances: balances.to_vec(),
            prices: prices.clone(),
            output: process(balances, prices),
        });
        true
    }

    /// Rows from the last computation; empty before the first one.
    pub fn output(&self) -> &[ProcessedBalance] {
        self.entry
            .as_ref()
            .map(|entry| entry.output.as_slice())
            .unwrap_or_default()
    }

    /// How many times the output has been rebuilt.
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }

    /// Drop the cached entry.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prices() -> PriceTable {
        [("ETH".to_string(), 2000.0), ("OSMO".to_string(), 1.0)]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_same_inputs_hit_cache() {
        let balances = WalletBalance::sample();
        let prices = prices();
        let mut cache = BalanceCache::new();

        let first = cache.get(&balances, &prices).to_vec();
        let second = cache.get(&balances, &prices).to_vec();

        assert_eq!(first, second);
        assert_eq!(first, process(&balances, &prices));
        assert_eq!(cache.recomputations(), 1);
    }

    #[test]
    fn test_changed_prices_recompute() {
        let balances = WalletBalance::sample();
        let mut prices = prices();
        let mut cache = BalanceCache::new();

        cache.get(&balances, &prices);
        prices.insert("ETH".to_string(), 2500.0);
        let rows = cache.get(&balances, &prices);

        let eth = rows.iter().find(|r| r.currency == "ETH").unwrap();
        assert_eq!(eth.usd_value, 6250.0);
        assert_eq!(cache.recomputations(), 2);
    }

    #[test]
    fn test_changed_balances_recompute() {
        let mut balances = WalletBalance::sample();
        let prices = prices();
        let mut cache = BalanceCache::new();

        cache.get(&balances, &prices);
        balances.push(WalletBalance::new("ATOM", 3.0, "Osmosis"));
        let rows = cache.get(&balances, &prices);

        assert!(rows.iter().any(|r| r.currency == "ATOM"));
        assert_eq!(cache.recomputations(), 2);
    }

    #[test]
    fn test_refresh_reports_rebuilds() {
        let balances = WalletBalance::sample();
        let prices = prices();
        let mut cache = BalanceCache::new();

        assert!(cache.output().is_empty());
        assert!(cache.refresh(&balances, &prices));
        assert!(!cache.refresh(&balances, &prices));
        assert_eq!(cache.output(), process(&balances, &prices).as_slice());
    }

    #[test]
    fn test_invalidate_forces_recompute() {
        let balances = WalletBalance::sample();
        let prices = prices();
        let mut cache = BalanceCache::new();

        cache.get(&balances, &prices);
        cache.invalidate();
        cache.get(&balances, &prices);
        assert_eq!(cache.recomputations(), 2);
    }
}
