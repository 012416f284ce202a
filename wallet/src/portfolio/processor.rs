//! Balance processing: map → filter → sort.
//!
//! Every stage is pure and order-preserving on its own, so [`process`] is just
//! their composition. None of the stages can fail: a missing price counts as
//! zero and an unknown blockchain gets [`SENTINEL_PRIORITY`].

use super::priority::{priority_of, SENTINEL_PRIORITY};
use super::{ProcessedBalance, WalletBalance};
use crate::price_feed::PriceTable;
use std::cmp::Ordering;
use tracing::debug;

/// Turn raw balances into display rows, filtered and sorted.
pub fn process(balances: &[WalletBalance], prices: &PriceTable) -> Vec<ProcessedBalance> {
    let rows = enrich(balances, prices);
    let enriched = rows.len();
    let rows = sort_for_display(retain_visible(rows));

    debug!(
        "processed {} balances: {} enriched, {} visible",
        balances.len(),
        enriched,
        rows.len()
    );
    rows
}

/// Map stage: attach priority, USD value and formatted amount to each balance.
pub fn enrich(balances: &[WalletBalance], prices: &PriceTable) -> Vec<ProcessedBalance> {
    balances
        .iter()
        .map(|balance| {
            let price = prices.get(&balance.currency).copied().unwrap_or(0.0);
            ProcessedBalance {
                currency: balance.currency.clone(),
                amount: balance.amount,
                blockchain: balance.blockchain.clone(),
                priority: priority_of(&balance.blockchain),
                usd_value: price * balance.amount,
                formatted_amount: format_amount(balance.amount),
            }
        })
        .collect()
}

/// Filter stage: keep positive holdings on recognised blockchains.
///
/// Zero amounts are dropped too. NaN fails the comparison and is dropped.
pub fn retain_visible(mut rows: Vec<ProcessedBalance>) -> Vec<ProcessedBalance> {
    rows.retain(|row| row.priority > SENTINEL_PRIORITY && row.amount > 0.0);
    rows
}

/// Sort stage: priority descending, then currency ascending.
///
/// `sort_by` is stable, so rows equal on both keys keep their input order.
pub fn sort_for_display(mut rows: Vec<ProcessedBalance>) -> Vec<ProcessedBalance> {
    rows.sort_by(display_order);
    rows
}

fn display_order(lhs: &ProcessedBalance, rhs: &ProcessedBalance) -> Ordering {
    rhs.priority
        .cmp(&lhs.priority)
        .then_with(|| lhs.currency.cmp(&rhs.currency))
}

fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}
