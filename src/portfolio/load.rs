use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use super::model::PortfolioData;

pub fn load_portfolio(path: &Path) -> Result<PortfolioData> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read portfolio data from {}", path.display()))?;
    parse_portfolio(&raw).with_context(|| format!("failed to load {}", path.display()))
}

pub fn parse_portfolio(raw: &str) -> Result<PortfolioData> {
    if raw.trim().is_empty() {
        bail!("portfolio data file is empty");
    }

    serde_json::from_str(raw).context("portfolio data is not valid JSON")
}
