//! Turning processed balances into something a person or a program can read.

use crate::portfolio::{total_usd_value, ProcessedBalance};
use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

pub trait Renderer {
    fn render(&self, rows: &[ProcessedBalance]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl OutputFormat {
    pub fn renderer(self) -> Box<dyn Renderer> {
        match self {
            Self::Table => Box::new(TableRenderer),
            Self::Json => Box::new(JsonRenderer),
        }
    }
}

/// Box-drawn table, one row per balance, with the total at the bottom.
/// Columns grow to fit the longest value.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableRenderer;

const HEADERS: [&str; 5] = ["Currency", "Blockchain", "Prio", "Amount", "Value USD"];
const MIN_WIDTHS: [usize; 5] = [8, 10, 4, 14, 14];

impl Renderer for TableRenderer {
    fn render(&self, rows: &[ProcessedBalance]) -> Result<String> {
        let cells: Vec<[String; 5]> = rows
            .iter()
            .map(|row| {
                [
                    row.currency.clone(),
                    row.blockchain.clone(),
                    row.priority.to_string(),
                    row.formatted_amount.clone(),
                    format!("${:.2}", row.usd_value),
                ]
            })
            .collect();
        let total = format!("${:.2}", total_usd_value(rows));

        let mut widths = MIN_WIDTHS;
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths[4] = widths[4].max(total.chars().count());
        let label_width = widths[..4].iter().sum::<usize>() + 3 * 3;

        let rule = |left: &str, mid: &str, right: &str| {
            let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
            format!("{left}{}{right}", segments.join(mid))
        };
        let line = |values: &[String; 5]| {
            let padded: Vec<String> = values
                .iter()
                .zip(widths)
                .map(|(value, w)| format!(" {value:>w$} "))
                .collect();
            format!("│{}│", padded.join("│"))
        };

        let mut lines = Vec::with_capacity(rows.len() + 6);
        lines.push(rule("┌", "┬", "┐"));
        lines.push(line(&HEADERS.map(String::from)));
        lines.push(rule("├", "┼", "┤"));
        lines.extend(cells.iter().map(line));
        lines.push(format!(
            "├{}┼{}┤",
            "─".repeat(label_width + 2),
            "─".repeat(widths[4] + 2)
        ));
        lines.push(format!(
            "│ {:>label_width$} │ {:>w$} │",
            "TOTAL",
            total,
            w = widths[4]
        ));
        lines.push(format!(
            "└{}┴{}┘",
            "─".repeat(label_width + 2),
            "─".repeat(widths[4] + 2)
        ));

        Ok(lines.join("\n"))
    }
}

/// Pretty JSON envelope with a timestamp and totals.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

#[derive(Debug, Serialize)]
struct BalancesEnvelope<'a> {
    source: &'static str,
    as_of: String,
    total_usd_value: f64,
    count: usize,
    balances: &'a [ProcessedBalance],
}

impl Renderer for JsonRenderer {
    fn render(&self, rows: &[ProcessedBalance]) -> Result<String> {
        let envelope = BalancesEnvelope {
            source: "wallet_balances",
            as_of: Utc::now().to_rfc3339(),
            total_usd_value: total_usd_value(rows),
            count: rows.len(),
            balances: rows,
        };
        serde_json::to_string_pretty(&envelope).context("failed to serialize balances")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::{process, WalletBalance};
    use crate::price_feed::PriceTable;

    fn rows() -> Vec<ProcessedBalance> {
        let prices: PriceTable = [("ETH".to_string(), 2000.0), ("OSMO".to_string(), 1.0)]
            .into_iter()
            .collect();
        process(
            &[
                WalletBalance::new("ETH", 2.5, "Ethereum"),
                WalletBalance::new("OSMO", 10.0, "Osmosis"),
            ],
            &prices,
        )
    }

    #[test]
    fn test_table_lists_rows_in_order() {
        let table = TableRenderer.render(&rows()).unwrap();
        let osmo = table.find("OSMO").unwrap();
        let eth = table.find("ETH").unwrap();

        assert!(osmo < eth);
        assert!(table.contains("10.00"));
        assert!(table.contains("5000.00"));
        assert!(table.contains("5010.00"));
        println!("{table}");
    }

    #[test]
    fn test_table_rows_are_aligned() {
        let table = TableRenderer.render(&rows()).unwrap();
        let widths: Vec<usize> = table.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{widths:?}");
    }

    #[test]
    fn test_long_values_widen_columns() {
        let prices: PriceTable = [("WBTC.ARB".to_string(), 64_000.0)].into_iter().collect();
        let mut rows = process(
            &[
                WalletBalance::new("WBTC.ARB", 123_456.5, "Arbitrum"),
                WalletBalance::new("OSMO", 10.0, "Osmosis"),
            ],
            &prices,
        );
        rows[0].blockchain = "Arbitrum One".to_string();

        let table = TableRenderer.render(&rows).unwrap();
        let widths: Vec<usize> = table.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{table}");
        assert!(table.contains("Arbitrum One"));
        assert!(table.contains("$7901216000.00"));
    }

    #[test]
    fn test_json_envelope() {
        let json = JsonRenderer.render(&rows()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["source"], "wallet_balances");
        assert_eq!(value["count"], 2);
        assert_eq!(value["total_usd_value"], 5010.0);
        assert_eq!(value["balances"][0]["currency"], "OSMO");
        assert_eq!(value["balances"][1]["usdValue"], 5000.0);
    }

    #[test]
    fn test_empty_render() {
        let table = OutputFormat::Table.renderer().render(&[]).unwrap();
        assert!(table.contains("0.00"));

        let json = OutputFormat::Json.renderer().render(&[]).unwrap();
        assert!(json.contains("\"count\": 0"));
    }
}
