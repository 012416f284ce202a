use super::PriceTable;
use crate::utils::serialization::de_opt_price;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

const ICON_BASE_URL: &str = "https://raw.githubusercontent.com/Switcheo/token-icons/main/tokens";

/// One entry of the upstream price list, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawToken {
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "de_opt_price")]
    pub price: Option<f64>,
    #[serde(default)]
    pub date: Option<String>,
}

/// A token with a usable price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub currency: String,
    pub price: f64,
    pub icon: String,
}

impl Token {
    pub fn new(currency: impl Into<String>, price: f64) -> Self {
        let currency = currency.into();
        let icon = icon_url(&currency);
        Self {
            currency,
            price,
            icon,
        }
    }
}

impl RawToken {
    /// Keep the entry only if it names a currency and has a positive, finite price.
    /// A zero price means "unpriced" upstream.
    fn into_token(self) -> Option<Token> {
        let currency = self.currency.filter(|c| !c.is_empty())?;
        let price = self.price.filter(|p| p.is_finite() && *p > 0.0)?;
        Some(Token::new(currency, price))
    }
}

pub fn icon_url(currency: &str) -> String {
    format!("{ICON_BASE_URL}/{currency}.svg")
}

/// Parse the upstream JSON price list, dropping entries without a usable price.
pub fn parse_feed(bytes: &[u8]) -> Result<Vec<Token>> {
    let raw: Vec<RawToken> =
        serde_json::from_slice(bytes).context("price feed: parse JSON failed")?;
    let total = raw.len();
    let tokens = from_raw(raw);
    debug!("price feed: kept {} of {} entries", tokens.len(), total);
    Ok(tokens)
}

pub(crate) fn from_raw(raw: Vec<RawToken>) -> Vec<Token> {
    raw.into_iter().filter_map(RawToken::into_token).collect()
}

/// Build a lookup table from tokens; a currency listed twice keeps its last price.
pub fn price_table(tokens: &[Token]) -> PriceTable {
    tokens
        .iter()
        .map(|t| (t.currency.clone(), t.price))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_feed_filters_unusable_entries() {
        let feed = br#"[
            {"currency": "BLUR", "date": "2023-08-29T07:10:40.000Z", "price": 0.20811525423728813},
            {"currency": "bNEO", "date": "2023-08-29T07:10:50.000Z", "price": 7.1282679},
            {"currency": "EMPTY", "price": null},
            {"currency": "ZERO", "price": 0},
            {"currency": "", "price": 1.0},
            {"price": 3.0},
            {"currency": "NEG", "price": -2.0},
            {"currency": "STR", "price": "1.5"}
        ]"#;

        let tokens = parse_feed(feed).unwrap();
        let symbols: Vec<_> = tokens.iter().map(|t| t.currency.as_str()).collect();
        assert_eq!(symbols, ["BLUR", "bNEO", "STR"]);
        assert_eq!(tokens[2].price, 1.5);
    }

    #[test]
    fn test_bad_price_drops_only_its_row() {
        let feed = br#"[
            {"currency": "ETH", "price": 1645.9},
            {"currency": "BAD", "price": "n/a"},
            {"currency": "ODD", "price": [1]}
        ]"#;

        let tokens = parse_feed(feed).unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].currency, "ETH");
        assert_eq!(tokens[0].price, 1645.9);
    }

    #[test]
    fn test_icon_url() {
        let token = Token::new("SWTH", 0.004);
        assert_eq!(
            token.icon,
            "https://raw.githubusercontent.com/Switcheo/token-icons/main/tokens/SWTH.svg"
        );
    }

    #[test]
    fn test_last_duplicate_wins() {
        let tokens = vec![
            Token::new("USDC", 0.99),
            Token::new("ETH", 1645.9),
            Token::new("USDC", 1.0),
        ];
        let table = price_table(&tokens);
        assert_eq!(table.len(), 2);
        assert_eq!(table["USDC"], 1.0);
    }

    #[test]
    fn test_feed_must_be_an_array() {
        assert!(parse_feed(br#"{"ETH": 1}"#).is_err());
        assert!(parse_feed(b"not json").is_err());
    }
}
