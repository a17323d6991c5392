pub mod format;
pub mod severity;
pub mod types;
pub mod view;

pub use types::{CopyTarget, TokenReport};

use std::path::Path;
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to read report file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse report: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Report has no token address")]
    MissingAddress,
}

/// Parse a report payload produced by the scoring service.
pub fn parse(json: &str) -> Result<TokenReport, ReportError> {
    let report: TokenReport = serde_json::from_str(json)?;
    if report.metadata.address.trim().is_empty() {
        return Err(ReportError::MissingAddress);
    }
    Ok(report)
}

/// Load a report payload from a JSON file.
#[instrument]
pub fn load(path: &Path) -> Result<TokenReport, ReportError> {
    let contents = std::fs::read_to_string(path)?;
    let report = parse(&contents)?;
    debug!(
        address = %report.metadata.address,
        level = %report.risk_score.level,
        factors = report.risk_score.factors.len(),
        "loaded report"
    );
    Ok(report)
}
