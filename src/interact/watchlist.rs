use async_trait::async_trait;
use thiserror::Error;
use tracing::{error, info, instrument};

use super::notify::{Notification, NotificationSink, Priority};
use crate::report::types::{TokenReport, WatchlistEntry};

#[derive(Debug, Error)]
pub enum WatchlistError {
    #[error("Watchlist store unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to persist watchlist: {0}")]
    Persist(#[from] std::io::Error),

    #[error("Failed to encode watchlist: {0}")]
    Encode(#[from] serde_json::Error),
}

/// External store that owns watchlist membership, keyed by token address.
#[async_trait]
pub trait WatchlistStore: Send + Sync {
    fn is_member(&self, address: &str) -> bool;

    async fn add(&self, address: &str, entry: WatchlistEntry) -> Result<(), WatchlistError>;

    async fn remove(&self, address: &str) -> Result<(), WatchlistError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    Failed,
}

/// Flip the report's token in or out of the watchlist.
///
/// Membership is read once; exactly one `add` or `remove` is issued. Store
/// failures are logged and surfaced as a medium-priority notice.
#[instrument(skip_all, fields(address = %report.metadata.address))]
pub async fn toggle(
    report: &TokenReport,
    store: &dyn WatchlistStore,
    notifier: &dyn NotificationSink,
) -> ToggleOutcome {
    let address = report.metadata.address.as_str();
    let symbol = report.metadata.symbol.as_str();

    let result = if store.is_member(address) {
        store.remove(address).await.map(|()| ToggleOutcome::Removed)
    } else {
        let entry = WatchlistEntry::from_report(report);
        store.add(address, entry).await.map(|()| ToggleOutcome::Added)
    };

    match result {
        Ok(outcome) => {
            let (title, change) = match outcome {
                ToggleOutcome::Removed => ("Removed from Watchlist", "removed from"),
                _ => ("Added to Watchlist", "added to"),
            };
            info!(change, "watchlist updated");
            notifier.notify(Notification::system(
                title,
                format!("{} has been {} your watchlist", symbol, change),
                Priority::Low,
            ));
            outcome
        }
        Err(err) => {
            error!(error = %err, "error toggling watchlist");
            notifier.notify(Notification::system(
                "Watchlist Error",
                "Failed to update watchlist",
                Priority::Medium,
            ));
            ToggleOutcome::Failed
        }
    }
}
