use super::WalletBalance;
use crate::utils::input::read_input;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

/// Where wallet balances come from. Each call returns a fresh snapshot.
#[async_trait]
pub trait BalanceSource: Send + Sync {
    async fn balances(&self) -> Result<Vec<WalletBalance>>;
}

/// Reads a JSON array of balances from a file, or stdin when the path is `-`.
#[derive(Debug, Clone)]
pub struct JsonFileBalanceSource {
    path: PathBuf,
}

impl JsonFileBalanceSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl BalanceSource for JsonFileBalanceSource {
    async fn balances(&self) -> Result<Vec<WalletBalance>> {
        let bytes = read_input(&self.path).await?;
        let balances: Vec<WalletBalance> = serde_json::from_slice(&bytes)
            .with_context(|| format!("failed to parse balances from {}", self.path.display()))?;
        debug!(
            "loaded {} balances from {}",
            balances.len(),
            self.path.display()
        );
        Ok(balances)
    }
}

/// Serves a fixed in-memory snapshot.
#[derive(Debug, Clone, Default)]
pub struct StaticBalanceSource {
    balances: Vec<WalletBalance>,
}

impl StaticBalanceSource {
    pub fn new(balances: Vec<WalletBalance>) -> Self {
        Self { balances }
    }
}

#[async_trait]
impl BalanceSource for StaticBalanceSource {
    async fn balances(&self) -> Result<Vec<WalletBalance>> {
        Ok(self.balances.clone())
    }
}
