mod adapters;
mod config;
mod interact;
mod render;
mod report;
#[cfg(test)]
mod testing;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, info_span, warn};
use tracing_subscriber::EnvFilter;

use adapters::{AssumeLoaded, CommandClipboard, ConsoleNotifier, HttpAssetLoader, LocalWatchlist};
use interact::{AssetLoader, Collaborators, ReportView};
use report::CopyTarget;

/// Token Report: renders a token risk assessment and lets you act on it by
/// toggling the token in your watchlist, expanding risk factors or copying addresses.
#[derive(Parser, Debug)]
#[command(name = "token-report", version, about)]
struct Cli {
    /// Path to a risk report JSON produced by the scoring service
    ///
    /// Not required when --mock is used.
    report: Option<PathBuf>,

    /// Optional output file path for markdown report
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Use a built-in sample report for demo purposes
    #[arg(long)]
    r#mock: bool,

    /// Add the token to the watchlist, or remove it if already present
    #[arg(long)]
    toggle_watchlist: bool,

    /// Toggle the details of the risk factor at INDEX (0-based, repeatable)
    #[arg(long = "toggle-factor", value_name = "INDEX")]
    toggle_factor: Vec<usize>,

    /// Copy an address to the clipboard
    #[arg(long, value_enum)]
    copy: Option<CopyArg>,

    /// Render the loading placeholder instead of the report
    #[arg(long)]
    loading: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CopyArg {
    Token,
    Deployer,
}

impl From<CopyArg> for CopyTarget {
    fn from(arg: CopyArg) -> Self {
        match arg {
            CopyArg::Token => CopyTarget::Token,
            CopyArg::Deployer => CopyTarget::Deployer,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let token_report = if cli.r#mock {
        info!("using mock report data for demo");
        report::parse(include_str!("../tests/fixtures/sample_report.json"))?
    } else {
        let path = cli.report.as_deref().ok_or(
            "Report path is required unless --mock is used. Usage: token-report <REPORT_JSON> or token-report --mock",
        )?;
        let _load_span = info_span!("load_report", path = %path.display()).entered();
        report::load(path)?
    };
    info!(
        symbol = %token_report.metadata.symbol,
        level = %token_report.risk_score.level,
        "report loaded"
    );

    info!("loading configuration");
    let config = config::Config::load()?;
    let collaborators = build_collaborators(&config)?;

    let mut view = ReportView::new(token_report, collaborators);
    view.set_loading(cli.loading);
    view.load_logo().await;

    if cli.toggle_watchlist {
        let outcome = view.toggle_watchlist().await;
        info!(?outcome, "watchlist toggle");
    }

    for index in cli.toggle_factor {
        match view.toggle_factor(index) {
            Some(expanded) => debug!(index, expanded, "factor toggled"),
            None => warn!(index, "risk factor has no expand control"),
        }
    }

    if let Some(target) = cli.copy {
        view.copy_address(target.into()).await;
    }

    render::output(&view.screen(), cli.output.as_deref())?;
    info!(
        symbol = %view.report().metadata.symbol,
        watchlisted = view.is_watchlisted(),
        copy_state = ?view.copy_state(),
        "done"
    );

    Ok(())
}

/// Wire the configured collaborators for a report view.
fn build_collaborators(config: &config::Config) -> Result<Collaborators, Box<dyn std::error::Error>> {
    let watchlist = match &config.watchlist.path {
        Some(path) => LocalWatchlist::open(path)?,
        None => LocalWatchlist::in_memory(),
    };
    debug!(entries = watchlist.len(), "watchlist ready");

    let assets: Arc<dyn AssetLoader> = if config.logo.probe {
        Arc::new(HttpAssetLoader::default())
    } else {
        Arc::new(AssumeLoaded)
    };

    Ok(Collaborators {
        watchlist: Arc::new(watchlist),
        notifier: Arc::new(ConsoleNotifier),
        clipboard: Arc::new(CommandClipboard::from_config(&config.clipboard)),
        assets,
    })
}
