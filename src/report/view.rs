use super::format::{
    format_count, format_long_date, format_timestamp, format_token_amount, holder_advisory,
    shorten_address, symbol_initial,
};
use super::severity::{expanded_by_default, shows_alert_banner, SeverityTier};
use super::types::{CopyTarget, RiskLevel, TokenReport};

pub const UNKNOWN: &str = "Unknown";
pub const ALERT_TITLE: &str = "High Risk Token Warning";
pub const ALERT_MESSAGE: &str =
    "This token has been identified as high risk. Exercise extreme caution before investing.";
pub const NO_FACTORS: &str = "No specific risk factors identified.";

const TOKEN_ADDRESS_CHARS: usize = 8;
const DEPLOYER_ADDRESS_CHARS: usize = 12;
const LOGO_PLACEHOLDER_URL: &str = "https://placehold.co/48x48/gray/white?text=";

/// Interaction state the view model is built from. Owned by the session.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub watchlisted: bool,
    pub copied: Option<CopyTarget>,
    /// Per-factor expansion, indexed like `risk_score.factors`.
    pub expanded: Vec<bool>,
    pub logo_failed: bool,
}

/// What a report view shows at a given moment.
#[derive(Debug, Clone)]
pub enum ReportScreen {
    Loading,
    Ready(Box<ReportViewModel>),
}

#[derive(Debug, Clone)]
pub struct ReportViewModel {
    pub header: Header,
    pub alert: Option<AlertBanner>,
    pub metadata: MetadataGrid,
    pub summary: RiskSummary,
    pub factors: Vec<FactorView>,
    pub deployer: Option<DeployerPanel>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Logo {
    Image { uri: String, alt: String },
    /// Image failed to load; placeholder image carrying the initial.
    Placeholder { uri: String, initial: char },
    /// No logo URI at all.
    Initial(char),
}

#[derive(Debug, Clone)]
pub struct Header {
    pub name: String,
    pub symbol: String,
    pub logo: Logo,
    pub verified: bool,
    pub address: String,
    pub short_address: String,
    pub copied: bool,
    pub score: f64,
    pub level: RiskLevel,
    pub tier: SeverityTier,
    pub watchlisted: bool,
    pub watchlist_label: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlertBanner {
    pub title: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone)]
pub struct MetadataGrid {
    pub supply: String,
    pub created: String,
    pub created_long: Option<String>,
    pub holders: String,
    pub holder_advisory: Option<&'static str>,
}

#[derive(Debug, Clone)]
pub struct RiskSummary {
    pub summary: String,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct FactorView {
    pub category: String,
    pub description: String,
    pub severity: RiskLevel,
    pub tier: SeverityTier,
    /// Expand control is shown only when the factor has evidence or impact.
    pub expandable: bool,
    pub expanded: bool,
    /// Populated only while expanded.
    pub evidence: Option<String>,
    pub impact: Option<String>,
}

impl FactorView {
    /// Label of the expand control, absent when there is no control.
    pub fn toggle_label(&self) -> Option<&'static str> {
        match (self.expandable, self.expanded) {
            (false, _) => None,
            (true, true) => Some("Collapse details"),
            (true, false) => Some("Expand details"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DeployerPanel {
    pub address: String,
    pub short_address: String,
    pub copied: bool,
    pub links: Vec<ExplorerLink>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerLink {
    pub label: &'static str,
    pub url: String,
}

/// Block explorer links for an account address.
pub fn explorer_links(address: &str) -> Vec<ExplorerLink> {
    vec![
        ExplorerLink {
            label: "Solscan",
            url: format!("https://solscan.io/account/{}", address),
        },
        ExplorerLink {
            label: "Solana FM",
            url: format!("https://solana.fm/address/{}", address),
        },
    ]
}

/// Build the view model. Deterministic in `report` and `state`.
pub fn build(report: &TokenReport, state: &ViewState) -> ReportViewModel {
    ReportViewModel {
        header: build_header(report, state),
        alert: shows_alert_banner(&report.risk_score.level).then_some(AlertBanner {
            title: ALERT_TITLE,
            message: ALERT_MESSAGE,
        }),
        metadata: build_metadata(report),
        summary: RiskSummary {
            summary: report.risk_score.summary.clone(),
            recommendations: report.risk_score.recommendations.clone(),
        },
        factors: report
            .risk_score
            .factors
            .iter()
            .enumerate()
            .map(|(i, factor)| {
                let expandable = factor.has_details();
                let expanded = expandable
                    && state
                        .expanded
                        .get(i)
                        .copied()
                        .unwrap_or_else(|| expanded_by_default(&factor.severity));
                FactorView {
                    category: factor.category.clone(),
                    description: factor.description.clone(),
                    severity: factor.severity.clone(),
                    tier: SeverityTier::classify(&factor.severity),
                    expandable,
                    expanded,
                    evidence: factor.evidence.clone().filter(|_| expanded),
                    impact: factor.impact.clone().filter(|_| expanded),
                }
            })
            .collect(),
        deployer: report.deployer_address.as_ref().map(|address| DeployerPanel {
            address: address.clone(),
            short_address: shorten_address(address, DEPLOYER_ADDRESS_CHARS),
            copied: state.copied == Some(CopyTarget::Deployer),
            links: explorer_links(address),
        }),
    }
}

fn build_header(report: &TokenReport, state: &ViewState) -> Header {
    let metadata = &report.metadata;
    let initial = symbol_initial(&metadata.symbol);
    let logo = match &metadata.logo_uri {
        Some(_) if state.logo_failed => Logo::Placeholder {
            uri: format!("{}{}", LOGO_PLACEHOLDER_URL, initial),
            initial,
        },
        Some(uri) => Logo::Image {
            uri: uri.clone(),
            alt: non_empty_or(&metadata.symbol, "Token"),
        },
        None => Logo::Initial(initial),
    };

    Header {
        name: non_empty_or(&metadata.name, "Unknown Token"),
        symbol: non_empty_or(&metadata.symbol, "???"),
        logo,
        verified: report.is_verified(),
        address: metadata.address.clone(),
        short_address: shorten_address(&metadata.address, TOKEN_ADDRESS_CHARS),
        copied: state.copied == Some(CopyTarget::Token),
        score: report.risk_score.score,
        level: report.risk_score.level.clone(),
        tier: SeverityTier::classify(&report.risk_score.level),
        watchlisted: state.watchlisted,
        watchlist_label: if state.watchlisted {
            "Remove from watchlist"
        } else {
            "Add to watchlist"
        },
    }
}

fn build_metadata(report: &TokenReport) -> MetadataGrid {
    let supply = match &report.metadata.total_supply {
        Some(raw) => format_token_amount(raw, report.metadata.decimals),
        None => UNKNOWN.to_string(),
    };
    let (created, created_long) = match &report.creation_date {
        Some(dt) => (format_timestamp(dt.timestamp()), Some(format_long_date(dt))),
        None => (UNKNOWN.to_string(), None),
    };
    let (holders, advisory) = match report.holders {
        Some(n) if n > 0 => (format_count(n), Some(holder_advisory(n))),
        _ => (UNKNOWN.to_string(), None),
    };

    MetadataGrid {
        supply,
        created,
        created_long,
        holders,
        holder_advisory: advisory,
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}
