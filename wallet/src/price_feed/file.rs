use super::token::{from_raw, RawToken, Token};
use super::PriceSource;
use crate::utils::input::read_input;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Reads prices from a JSON file, or stdin when the path is `-`.
///
/// Two layouts are accepted:
/// - the upstream feed, an array of `{"currency", "price", "date"}` objects
/// - a plain `{"SYMBOL": price}` object
#[derive(Debug, Clone)]
pub struct JsonFilePriceSource {
    path: PathBuf,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PriceFile {
    Feed(Vec<RawToken>),
    Table(BTreeMap<String, f64>),
}

impl JsonFilePriceSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PriceSource for JsonFilePriceSource {
    async fn tokens(&self) -> Result<Vec<Token>> {
        let bytes = read_input(&self.path).await?;
        let file: PriceFile = serde_json::from_slice(&bytes).with_context(|| {
            format!(
                "failed to parse prices from {}: expected a price feed array or a symbol → price object",
                self.path.display()
            )
        })?;

        let tokens = match file {
            PriceFile::Feed(raw) => from_raw(raw),
            PriceFile::Table(table) => table
                .into_iter()
                .filter_map(|(currency, price)| {
                    if price.is_finite() && price >= 0.0 {
                        Some(Token::new(currency, price))
                    } else {
                        warn!("ignoring unusable price {} for {}", price, currency);
                        None
                    }
                })
                .collect(),
        };

        debug!("loaded {} prices from {}", tokens.len(), self.path.display());
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_reads_feed_layout() {
        let file = write_temp(
            r#"[
                {"currency": "ETH", "date": "2023-08-29T07:10:52.000Z", "price": 1645.93},
                {"currency": "LUNA", "date": "2023-08-29T07:10:40.000Z", "price": null},
                {"currency": "ETH", "date": "2023-08-29T07:10:53.000Z", "price": 1646.0}
            ]"#,
        );

        let source = JsonFilePriceSource::new(file.path());
        let tokens = source.tokens().await.unwrap();
        assert_eq!(tokens.len(), 2);

        let prices = source.prices().await.unwrap();
        assert_eq!(prices.len(), 1);
        assert_eq!(prices["ETH"], 1646.0);
    }

    #[tokio::test]
    async fn test_reads_table_layout() {
        let file = write_temp(r#"{"OSMO": 1, "ETH": 2000.5, "BAD": -1}"#);

        let prices = JsonFilePriceSource::new(file.path()).prices().await.unwrap();
        assert_eq!(prices.len(), 2);
        assert_eq!(prices["OSMO"], 1.0);
        assert_eq!(prices["ETH"], 2000.5);
    }

    #[tokio::test]
    async fn test_feed_keeps_rows_around_a_bad_price() {
        let file = write_temp(
            r#"[{"currency": "ETH", "price": 1645.9}, {"currency": "BAD", "price": "n/a"}]"#,
        );
        let prices = JsonFilePriceSource::new(file.path()).prices().await.unwrap();
        assert_eq!(prices.len(), 1);
        assert_eq!(prices["ETH"], 1645.9);
    }

    #[tokio::test]
    async fn test_rejects_other_shapes() {
        let file = write_temp(r#""just a string""#);
        let err = JsonFilePriceSource::new(file.path())
            .tokens()
            .await
            .unwrap_err();
        assert!(err.to_string().contains("failed to parse prices"));
    }
}
