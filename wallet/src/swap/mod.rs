//! Currency swap quoting and a simulated settlement.
//!
//! Prices are quoted in USD, so the rate between two tokens is the ratio of
//! their prices. Nothing here touches a real exchange: [`simulate`] only waits
//! for the configured settlement delay.

mod error;

pub use error::SwapError;

use crate::price_feed::Token;
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

/// Largest amount a single swap may move.
pub const MAX_SWAP_AMOUNT: f64 = 1_000_000_000.0;

/// Default simulated settlement time.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_secs(2);

#[derive(Builder, Clone, Debug)]
pub struct SwapConfig {
    /// Upper bound on the amount of a single swap
    #[builder(default = "MAX_SWAP_AMOUNT")]
    pub max_amount: f64,
    /// How long the simulated swap takes to settle
    #[builder(default = "DEFAULT_SETTLE_DELAY")]
    pub settle_delay: Duration,
}

impl SwapConfig {
    pub fn builder() -> SwapConfigBuilder {
        SwapConfigBuilder::default()
    }
}

impl Default for SwapConfig {
    fn default() -> Self {
        Self {
            max_amount: MAX_SWAP_AMOUNT,
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }
}

/// What the user asked for. The amount stays as typed until validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwapRequest {
    pub from: String,
    pub to: String,
    pub amount: String,
}

impl SwapRequest {
    pub fn new(from: impl Into<String>, to: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            amount: amount.into(),
        }
    }

    /// Swap the from and to tokens.
    pub fn switch(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
    }

    /// Check the request against the form rules, returning the parsed amount.
    pub fn validate(&self, config: &SwapConfig) -> Result<f64, SwapError> {
        if self.from.trim().is_empty() {
            return Err(SwapError::MissingFrom);
        }
        if self.to.trim().is_empty() {
            return Err(SwapError::MissingTo);
        }
        if self.from == self.to {
            return Err(SwapError::SameToken(self.from.clone()));
        }
        if self.amount.trim().is_empty() {
            return Err(SwapError::MissingAmount);
        }
        let amount = parse_amount(&self.amount)
            .ok_or_else(|| SwapError::InvalidAmount(self.amount.clone()))?;
        if amount > config.max_amount {
            return Err(SwapError::AboveMaximum {
                amount,
                max: config.max_amount,
            });
        }
        Ok(amount)
    }
}

/// A priced, validated swap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwapQuote {
    pub from: String,
    pub to: String,
    pub amount: f64,
    pub rate: f64,
    pub receive: f64,
}

impl SwapQuote {
    pub fn formatted_receive(&self) -> String {
        format!("{:.6}", self.receive)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SwapReceipt {
    pub quote: SwapQuote,
    pub completed_at: DateTime<Utc>,
}

/// How many `to` tokens one `from` token buys.
///
/// Zero when either token is not listed or the `to` price is zero.
pub fn exchange_rate(tokens: &[Token], from: &str, to: &str) -> f64 {
    let (Some(from), Some(to)) = (find_token(tokens, from), find_token(tokens, to)) else {
        return 0.0;
    };
    if to.price == 0.0 {
        return 0.0;
    }
    from.price / to.price
}

/// Amount received for the typed `amount` at `rate`; zero for anything that is
/// not a positive number.
pub fn receive_amount(amount: &str, rate: f64) -> f64 {
    parse_amount(amount).map_or(0.0, |num| num * rate)
}

/// Validate `request` and price it against `tokens`.
pub fn quote(
    tokens: &[Token],
    request: &SwapRequest,
    config: &SwapConfig,
) -> Result<SwapQuote, SwapError> {
    let amount = request.validate(config)?;
    for sym in [&request.from, &request.to] {
        if find_token(tokens, sym).is_none() {
            return Err(SwapError::UnknownToken(sym.clone()));
        }
    }

    let rate = exchange_rate(tokens, &request.from, &request.to);
    let quote = SwapQuote {
        from: request.from.clone(),
        to: request.to.clone(),
        amount,
        rate,
        receive: amount * rate,
    };
    debug!(
        "quoted {} {} -> {} {} at rate {}",
        quote.amount, quote.from, quote.receive, quote.to, quote.rate
    );
    Ok(quote)
}

/// Pretend to settle the swap: wait out the delay and hand back a receipt.
pub async fn simulate(quote: SwapQuote, delay: Duration) -> SwapReceipt {
    tokio::time::sleep(delay).await;
    info!(
        "swap simulated: {} {} -> {} {}",
        quote.amount,
        quote.from,
        quote.formatted_receive(),
        quote.to
    );
    SwapReceipt {
        quote,
        completed_at: Utc::now(),
    }
}

// The first listing of a symbol sets its swap price.
fn find_token<'a>(tokens: &'a [Token], currency: &str) -> Option<&'a Token> {
    tokens.iter().find(|t| t.currency == currency)
}

fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|num| num.is_finite() && *num > 0.0)
}
