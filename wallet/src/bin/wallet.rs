use anyhow::{Context, Result};
use wallet_balances::utils::logging::init_logging;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging().context("initializing logging")?;

    wallet_balances::run().await
}
