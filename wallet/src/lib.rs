//! Wallet balances toolkit.
//!
//! Prices and sorts wallet balances for display, quotes simulated currency
//! swaps from a token price list, and sums integer series.

mod app;
mod cli;
pub mod config;
pub mod portfolio;
pub mod price_feed;
pub mod render;
pub mod series;
pub mod swap;
pub mod ui;
pub mod utils;

pub use app::{run_swap, show_balances, watch_balances, Application};
pub use cli::Cli;
pub use config::{BalancesConfig, PriceConfig, SwapRunConfig};
pub use portfolio::{
    process, total_usd_value, BalanceCache, BalanceSource, ProcessedBalance, WalletBalance,
};
pub use price_feed::{PriceSource, PriceTable, Token};
pub use render::{OutputFormat, Renderer};
pub use swap::{SwapConfig, SwapError, SwapQuote, SwapRequest};

/// Parse the command line and run the selected command.
pub async fn run() -> anyhow::Result<()> {
    let application = Application::init()?;
    application.run().await
}
