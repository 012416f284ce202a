use crate::cli::{BalancesArgs, PriceArgs, SwapArgs};
use crate::portfolio::{BalanceSource, JsonFileBalanceSource, StaticBalanceSource, WalletBalance};
use crate::price_feed::{JsonFilePriceSource, PriceSource, StaticPriceSource};
use crate::render::OutputFormat;
use crate::swap::{SwapConfig, SwapRequest};
use anyhow::{Context, Result};
use derive_builder::Builder;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

/// Where prices are read from.
#[derive(Builder, Clone, Debug, Default)]
pub struct PriceConfig {
    /// Price file; `None` means the built-in sample prices
    #[builder(setter(into, strip_option), default)]
    pub path: Option<PathBuf>,
}

impl PriceConfig {
    pub fn builder() -> PriceConfigBuilder {
        PriceConfigBuilder::default()
    }

    pub fn source(&self) -> Box<dyn PriceSource> {
        match &self.path {
            Some(path) => Box::new(JsonFilePriceSource::new(path)),
            None => {
                warn!("no prices file given, using sample prices");
                Box::new(StaticPriceSource::sample())
            }
        }
    }
}

impl From<PriceArgs> for PriceConfig {
    fn from(args: PriceArgs) -> Self {
        Self { path: args.path }
    }
}

#[derive(Builder, Clone, Debug)]
pub struct BalancesConfig {
    /// Balances file; `None` means the built-in sample wallet
    #[builder(setter(into, strip_option), default)]
    pub balances: Option<PathBuf>,
    #[builder(default)]
    pub prices: PriceConfig,
    #[builder(default)]
    pub format: OutputFormat,
    /// Poll the inputs at this interval instead of printing once
    #[builder(setter(strip_option), default)]
    pub watch_interval: Option<Duration>,
}

impl BalancesConfig {
    pub fn builder() -> BalancesConfigBuilder {
        BalancesConfigBuilder::default()
    }

    pub fn balance_source(&self) -> Box<dyn BalanceSource> {
        match &self.balances {
            Some(path) => Box::new(JsonFileBalanceSource::new(path)),
            None => {
                warn!("no balances file given, using sample wallet");
                Box::new(StaticBalanceSource::new(WalletBalance::sample()))
            }
        }
    }
}

impl TryFrom<BalancesArgs> for BalancesConfig {
    type Error = anyhow::Error;

    fn try_from(args: BalancesArgs) -> Result<Self> {
        let mut builder = BalancesConfig::builder();
        builder.prices(args.prices.into()).format(args.format);
        if let Some(path) = args.balances {
            builder.balances(path);
        }
        if let Some(secs) = args.watch_secs {
            anyhow::ensure!(secs > 0, "--watch-secs must be at least 1");
            builder.watch_interval(Duration::from_secs(secs));
        }
        builder
            .build()
            .context("Failed to build balances configuration")
    }
}

#[derive(Builder, Clone, Debug)]
#[builder(pattern = "owned")]
pub struct SwapRunConfig {
    #[builder(default)]
    pub prices: PriceConfig,
    pub request: SwapRequest,
    #[builder(default)]
    pub swap: SwapConfig,
}

impl SwapRunConfig {
    pub fn builder() -> SwapRunConfigBuilder {
        SwapRunConfigBuilder::default()
    }
}

impl TryFrom<SwapArgs> for SwapRunConfig {
    type Error = anyhow::Error;

    fn try_from(args: SwapArgs) -> Result<Self> {
        let mut request = SwapRequest::new(args.from, args.to, args.amount);
        if args.switch {
            request.switch();
        }

        let swap = SwapConfig::builder()
            .max_amount(args.max_amount)
            .settle_delay(Duration::from_millis(args.delay_ms))
            .build()
            .context("Failed to build swap configuration")?;

        SwapRunConfig::builder()
            .prices(args.prices.into())
            .request(request)
            .swap(swap)
            .build()
            .context("Failed to build swap configuration")
    }
}
