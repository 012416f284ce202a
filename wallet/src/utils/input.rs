use anyhow::{Context, Result};
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Read a whole input file. A path of `-` reads stdin instead.
pub(crate) async fn read_input(path: &Path) -> Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        tokio::io::stdin()
            .read_to_end(&mut buf)
            .await
            .context("failed to read stdin")?;
        return Ok(buf);
    }

    tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))
}
