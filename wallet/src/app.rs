use crate::cli::{Cli, Command, SumSelection};
use crate::config::{BalancesConfig, SwapRunConfig};
use crate::portfolio::{process, BalanceCache, WalletBalance};
use crate::price_feed::PriceTable;
use crate::render::Renderer;
use crate::series::SumMethod;
use crate::swap::{quote, simulate};
use crate::ui::messages::{display_quote, display_receipt, display_sum, display_swap_rejected};
use crate::ui::with_spinner;
use anyhow::{Context, Result};
use clap::Parser;
use strum::IntoEnumIterator;
use tracing::{debug, info, warn};

pub enum Application {
    Balances(BalancesConfig),
    Swap(SwapRunConfig),
    SumToN { n: i64, methods: Vec<SumMethod> },
}

impl Application {
    pub fn init() -> Result<Application> {
        // Preload environment variables from .env file if it exists before parsing CLI args
        dotenvy::dotenv().ok();

        let cli = Cli::parse();

        let application = match cli.cmd {
            Command::Balances(args) => Application::Balances(args.try_into()?),
            Command::Swap(args) => Application::Swap(args.try_into()?),
            Command::SumToN(args) => {
                let methods: Vec<SumMethod> = match args.method {
                    SumSelection::One(method) => vec![method],
                    SumSelection::All => SumMethod::iter().collect(),
                };
                for method in &methods {
                    method.check(args.n)?;
                }
                Application::SumToN { n: args.n, methods }
            }
        };

        Ok(application)
    }

    pub async fn run(&self) -> Result<()> {
        match self {
            Self::Balances(config) => match config.watch_interval {
                Some(_) => watch_balances(config).await,
                None => show_balances(config).await,
            },
            Self::Swap(config) => run_swap(config).await,
            Self::SumToN { n, methods } => {
                for method in methods {
                    display_sum(*method, *n, method.sum_to_n(*n)?);
                }
                Ok(())
            }
        }
    }
}

pub async fn show_balances(config: &BalancesConfig) -> Result<()> {
    let balances = config
        .balance_source()
        .balances()
        .await
        .context("Failed to load balances")?;
    let prices = config
        .prices
        .source()
        .prices()
        .await
        .context("Failed to load prices")?;

    let rows = process(&balances, &prices);
    info!("{} of {} balances shown", rows.len(), balances.len());
    println!("{}", config.format.renderer().render(&rows)?);
    Ok(())
}

/// Re-read both inputs on every tick; print only when the processed rows were rebuilt.
pub async fn watch_balances(config: &BalancesConfig) -> Result<()> {
    let interval = config
        .watch_interval
        .context("watch mode needs an interval")?;
    let balance_source = config.balance_source();
    let price_source = config.prices.source();
    let renderer = config.format.renderer();
    let mut cache = BalanceCache::new();
    let mut ticker = tokio::time::interval(interval);

    let stop = tokio::signal::ctrl_c();
    tokio::pin!(stop);

    info!("watching balances every {:?}, Ctrl-C to stop", interval);
    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = &mut stop => break,
        }

        let loaded = tokio::select! {
            loaded = async { tokio::try_join!(balance_source.balances(), price_source.prices()) } => loaded,
            _ = &mut stop => break,
        };

        if let Some(frame) = next_frame(&mut cache, renderer.as_ref(), loaded) {
            println!("{frame}");
        }
    }

    info!("stopped after {} refreshes", cache.recomputations());
    Ok(())
}

/// One watch tick: the rendered rows when they changed, `None` otherwise.
/// Load and render failures are logged and leave the last good output on screen.
fn next_frame(
    cache: &mut BalanceCache,
    renderer: &dyn Renderer,
    loaded: Result<(Vec<WalletBalance>, PriceTable)>,
) -> Option<String> {
    let (balances, prices) = match loaded {
        Ok(inputs) => inputs,
        Err(e) => {
            warn!("refresh failed: {e:#}");
            return None;
        }
    };

    if !cache.refresh(&balances, &prices) {
        debug!("inputs unchanged");
        return None;
    }

    match renderer.render(cache.output()) {
        Ok(frame) => Some(frame),
        Err(e) => {
            warn!("render failed: {e:#}");
            // retry on the next tick even if the inputs stay the same
            cache.invalidate();
            None
        }
    }
}

pub async fn run_swap(config: &SwapRunConfig) -> Result<()> {
    let tokens = config
        .prices
        .source()
        .tokens()
        .await
        .context("Failed to load token prices")?;

    let quote = match quote(&tokens, &config.request, &config.swap) {
        Ok(quote) => quote,
        Err(err) => {
            display_swap_rejected(&err);
            return Err(anyhow::Error::new(err).context("Swap rejected"));
        }
    };
    display_quote(&quote);

    let receipt = with_spinner("Swapping...", simulate(quote, config.swap.settle_delay)).await;
    display_receipt(&receipt);
    Ok(())
}
