use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Risk level of a whole report or of a single factor.
///
/// Known labels are `low`, `medium`, `high` and `critical`. Anything else is kept
/// verbatim as `Unrecognized` so it can still be displayed, and is classified
/// into the neutral tier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
    Unrecognized(String),
}

impl RiskLevel {
    /// Lowercase label as it appears in report payloads.
    pub fn as_str(&self) -> &str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
            RiskLevel::Unrecognized(label) => label,
        }
    }
}

impl From<String> for RiskLevel {
    fn from(label: String) -> Self {
        match label.as_str() {
            "low" => RiskLevel::Low,
            "medium" => RiskLevel::Medium,
            "high" => RiskLevel::High,
            "critical" => RiskLevel::Critical,
            _ => RiskLevel::Unrecognized(label),
        }
    }
}

impl From<&str> for RiskLevel {
    fn from(label: &str) -> Self {
        RiskLevel::from(label.to_string())
    }
}

impl From<RiskLevel> for String {
    fn from(level: RiskLevel) -> Self {
        level.as_str().to_string()
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "LOW"),
            RiskLevel::Medium => write!(f, "MEDIUM"),
            RiskLevel::High => write!(f, "HIGH"),
            RiskLevel::Critical => write!(f, "CRITICAL"),
            RiskLevel::Unrecognized(label) if label.is_empty() => write!(f, "UNKNOWN"),
            RiskLevel::Unrecognized(label) => write!(f, "{}", label.to_uppercase()),
        }
    }
}

/// Static token information.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenMetadata {
    /// Mint address; identity key for watchlist membership and copy targeting
    pub address: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub decimals: u8,
    /// Raw (unscaled) supply. Accepts a JSON string, integer or float.
    #[serde(default, deserialize_with = "raw_amount")]
    pub total_supply: Option<String>,
    #[serde(default, rename = "logoURI", deserialize_with = "non_empty")]
    pub logo_uri: Option<String>,
}

/// Scoring output for a token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskScore {
    pub score: f64,
    pub level: RiskLevel,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub recommendations: Vec<String>,
    /// Display order is payload order.
    #[serde(default)]
    pub factors: Vec<TokenRiskFactor>,
}

/// One identified concern contributing to the score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenRiskFactor {
    pub category: String,
    pub description: String,
    pub severity: RiskLevel,
    #[serde(default, deserialize_with = "non_empty")]
    pub evidence: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub impact: Option<String>,
}

impl TokenRiskFactor {
    /// Whether the factor carries any detail worth expanding.
    pub fn has_details(&self) -> bool {
        self.evidence.is_some() || self.impact.is_some()
    }
}

/// Complete risk assessment for one token. Read-only input to the view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenReport {
    pub metadata: TokenMetadata,
    pub risk_score: RiskScore,
    /// RFC 3339 string, bare date or epoch milliseconds.
    #[serde(default, deserialize_with = "timestamp")]
    pub creation_date: Option<DateTime<Utc>>,
    /// Positive holder count; malformed or non-positive values read as absent.
    #[serde(default, deserialize_with = "positive_count")]
    pub holders: Option<u64>,
    #[serde(default, deserialize_with = "non_empty")]
    pub deployer_address: Option<String>,
    #[serde(default)]
    pub rug_check_verified: Option<bool>,
}

impl TokenReport {
    pub fn is_verified(&self) -> bool {
        self.rug_check_verified.unwrap_or(false)
    }

    /// Address targeted by a copy action, if that field exists in this report.
    pub fn address_for(&self, target: CopyTarget) -> Option<&str> {
        match target {
            CopyTarget::Token => Some(self.metadata.address.as_str()),
            CopyTarget::Deployer => self.deployer_address.as_deref(),
        }
    }
}

/// Which address a copy action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CopyTarget {
    Token,
    Deployer,
}

impl std::fmt::Display for CopyTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CopyTarget::Token => write!(f, "token"),
            CopyTarget::Deployer => write!(f, "deployer"),
        }
    }
}

/// Record handed to the watchlist store when a token is added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistEntry {
    pub mint: String,
    pub owner: String,
    pub amount: String,
    pub decimals: u8,
    pub ui_amount: f64,
    pub symbol: String,
    pub name: String,
    #[serde(rename = "logoURI", skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
    pub risk_score: f64,
    pub risk_level: RiskLevel,
}

impl WatchlistEntry {
    /// Snapshot the report's metadata and score. The entry holds no balance.
    pub fn from_report(report: &TokenReport) -> Self {
        let metadata = &report.metadata;
        WatchlistEntry {
            mint: metadata.address.clone(),
            owner: String::new(),
            amount: "0".to_string(),
            decimals: metadata.decimals,
            ui_amount: 0.0,
            symbol: metadata.symbol.clone(),
            name: metadata.name.clone(),
            logo_uri: metadata.logo_uri.clone(),
            risk_score: report.risk_score.score,
            risk_level: report.risk_score.level.clone(),
        }
    }
}

fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Integer(u64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Raw supply as a decimal string. Floats are truncated to whole base units;
/// negative or unreadable values become `None`.
fn raw_amount<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<RawAmount>::deserialize(deserializer)?;
    Ok(match value {
        Some(RawAmount::Integer(n)) => Some(n.to_string()),
        Some(RawAmount::Float(f)) if f.is_finite() && f >= 0.0 => Some(format!("{:.0}", f.trunc())),
        Some(RawAmount::Text(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCount {
    Integer(i64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Holder count. Anything that is not a positive whole count becomes `None`.
fn positive_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<RawCount>::deserialize(deserializer)?;
    let count = match value {
        Some(RawCount::Integer(n)) => u64::try_from(n).ok(),
        Some(RawCount::Float(f)) if f.is_finite() && f >= 1.0 && f <= u64::MAX as f64 => {
            Some(f.trunc() as u64)
        }
        Some(RawCount::Text(s)) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    Ok(count.filter(|n| *n > 0))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Millis(i64),
    Text(String),
    Other(IgnoredAny),
}

/// Creation date as RFC 3339, a bare `YYYY-MM-DD` (midnight UTC) or epoch
/// milliseconds. Unreadable values become `None`.
fn timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawTimestamp>::deserialize(deserializer)? {
        Some(RawTimestamp::Millis(ms)) => Utc.timestamp_millis_opt(ms).single(),
        Some(RawTimestamp::Text(s)) => parse_date_text(s.trim()),
        _ => None,
    })
}

fn parse_date_text(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.and_utc());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
