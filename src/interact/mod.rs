pub mod assets;
pub mod copy;
pub mod factor;
pub mod notify;
pub mod watchlist;

pub use assets::AssetLoader;
pub use copy::{Clipboard, CopyState};
pub use notify::NotificationSink;
pub use watchlist::{ToggleOutcome, WatchlistStore};

use std::sync::Arc;
use tracing::{debug, error, instrument, warn};

use crate::report::types::{CopyTarget, TokenReport};
use crate::report::view::{self, ReportScreen, ViewState};
use copy::CopyFeedback;
use factor::RiskFactorItem;
use notify::{Notification, Priority};

/// External capabilities a report view talks to.
#[derive(Clone)]
pub struct Collaborators {
    pub watchlist: Arc<dyn WatchlistStore>,
    pub notifier: Arc<dyn NotificationSink>,
    pub clipboard: Arc<dyn Clipboard>,
    pub assets: Arc<dyn AssetLoader>,
}

/// One rendered report and its local interaction state.
///
/// Factor expansion is held per factor position; copy feedback and logo state
/// belong to this instance only. Dropping the view cancels the copy timer.
pub struct ReportView {
    report: TokenReport,
    loading: bool,
    logo_failed: bool,
    factors: Vec<RiskFactorItem>,
    copy: CopyFeedback,
    collaborators: Collaborators,
}

impl ReportView {
    pub fn new(report: TokenReport, collaborators: Collaborators) -> Self {
        let factors = report.risk_score.factors.iter().map(RiskFactorItem::new).collect();
        Self {
            report,
            loading: false,
            logo_failed: false,
            factors,
            copy: CopyFeedback::default(),
            collaborators,
        }
    }

    pub fn report(&self) -> &TokenReport {
        &self.report
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn is_watchlisted(&self) -> bool {
        self.collaborators.watchlist.is_member(&self.report.metadata.address)
    }

    pub fn copy_state(&self) -> CopyState {
        self.copy.state()
    }

    /// Toggle watchlist membership of this report's token.
    pub async fn toggle_watchlist(&self) -> ToggleOutcome {
        watchlist::toggle(
            &self.report,
            self.collaborators.watchlist.as_ref(),
            self.collaborators.notifier.as_ref(),
        )
        .await
    }

    /// Toggle the expand control of factor `index`. `None` when the factor does
    /// not exist or has no control.
    pub fn toggle_factor(&mut self, index: usize) -> Option<bool> {
        let expanded = self.factors.get_mut(index)?.toggle();
        debug!(index, ?expanded, "factor toggled");
        expanded
    }

    /// Copy the full address behind `target`. Returns whether it reached the
    /// clipboard.
    #[instrument(skip(self), fields(address = %self.report.metadata.address))]
    pub async fn copy_address(&mut self, target: CopyTarget) -> bool {
        let Some(address) = self.report.address_for(target).map(str::to_string) else {
            warn!(copy_target = %target, "no address to copy");
            return false;
        };

        match self.collaborators.clipboard.write_text(&address).await {
            Ok(()) => {
                debug!("address copied");
                self.copy.succeeded(target);
                true
            }
            Err(err) => {
                error!(error = %err, "failed to copy address");
                self.copy.failed();
                self.collaborators.notifier.notify(Notification::system(
                    "Copy Failed",
                    "Failed to copy address to clipboard",
                    Priority::Low,
                ));
                false
            }
        }
    }

    /// Try to load the logo; on failure the header falls back to a placeholder.
    pub async fn load_logo(&mut self) {
        let Some(uri) = self.report.metadata.logo_uri.clone() else {
            return;
        };
        if let Err(err) = self.collaborators.assets.load(&uri).await {
            warn!(error = %err, %uri, "logo failed to load");
            self.logo_failed = true;
        }
    }

    /// Current screen, built from the report and local state.
    pub fn screen(&self) -> ReportScreen {
        if self.loading {
            return ReportScreen::Loading;
        }
        let state = ViewState {
            watchlisted: self.is_watchlisted(),
            copied: self.copy.state().copied(),
            expanded: self.factors.iter().map(RiskFactorItem::is_expanded).collect(),
            logo_failed: self.logo_failed,
        };
        ReportScreen::Ready(Box::new(view::build(&self.report, &state)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{collaborators, sample_report, RecordingNotifier, RecordingStore, ScriptedClipboard};
    use std::time::Duration;

    fn ready(view: &ReportView) -> Box<view::ReportViewModel> {
        match view.screen() {
            ReportScreen::Ready(model) => model,
            ReportScreen::Loading => panic!("expected a ready screen"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_token_shows_copied_then_reverts() {
        let clipboard = Arc::new(ScriptedClipboard::default());
        let (collab, _, _) = collaborators(RecordingStore::default(), clipboard.clone());
        let mut view = ReportView::new(sample_report(), collab);

        assert!(view.copy_address(CopyTarget::Token).await);
        assert_eq!(clipboard.written(), vec![view.report().metadata.address.clone()]);

        let model = ready(&view);
        assert!(model.header.copied);
        assert!(!model.deployer.as_ref().unwrap().copied);

        tokio::time::sleep(Duration::from_millis(2001)).await;
        let model = ready(&view);
        assert!(!model.header.copied);
        assert_eq!(view.copy_state(), CopyState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_deployer_replaces_token_indicator() {
        let clipboard = Arc::new(ScriptedClipboard::default());
        let (collab, _, _) = collaborators(RecordingStore::default(), clipboard.clone());
        let mut view = ReportView::new(sample_report(), collab);

        view.copy_address(CopyTarget::Token).await;
        view.copy_address(CopyTarget::Deployer).await;

        let model = ready(&view);
        assert!(!model.header.copied);
        assert!(model.deployer.as_ref().unwrap().copied);
        assert_eq!(
            clipboard.written()[1],
            view.report().deployer_address.clone().unwrap()
        );
    }

    #[tokio::test]
    async fn test_copy_failure_notifies_and_stays_idle() {
        let clipboard = Arc::new(ScriptedClipboard::failing());
        let (collab, _, notifier) = collaborators(RecordingStore::default(), clipboard);
        let mut view = ReportView::new(sample_report(), collab);

        assert!(!view.copy_address(CopyTarget::Token).await);
        assert_eq!(view.copy_state(), CopyState::Idle);

        let sent = notifier.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].title, "Copy Failed");
        assert_eq!(sent[0].message, "Failed to copy address to clipboard");
        assert_eq!(sent[0].priority, Priority::Low);
    }

    #[tokio::test]
    async fn test_copy_missing_deployer_is_noop() {
        let clipboard = Arc::new(ScriptedClipboard::default());
        let (collab, _, notifier) = collaborators(RecordingStore::default(), clipboard.clone());
        let mut report = sample_report();
        report.deployer_address = None;
        let mut view = ReportView::new(report, collab);

        assert!(!view.copy_address(CopyTarget::Deployer).await);
        assert!(clipboard.written().is_empty());
        assert!(notifier.sent().is_empty());
        assert_eq!(view.copy_state(), CopyState::Idle);
    }

    #[tokio::test]
    async fn test_watchlist_toggle_updates_header() {
        let (collab, store, _) =
            collaborators(RecordingStore::default(), Arc::new(ScriptedClipboard::default()));
        let view = ReportView::new(sample_report(), collab);
        assert!(!ready(&view).header.watchlisted);

        assert_eq!(view.toggle_watchlist().await, ToggleOutcome::Added);
        assert!(ready(&view).header.watchlisted);
        assert_eq!(store.adds().len(), 1);

        assert_eq!(view.toggle_watchlist().await, ToggleOutcome::Removed);
        assert!(!ready(&view).header.watchlisted);
        assert_eq!(store.removes().len(), 1);
    }

    #[tokio::test]
    async fn test_watchlist_failure_leaves_state_unchanged() {
        let (collab, _, notifier) =
            collaborators(RecordingStore::failing(), Arc::new(ScriptedClipboard::default()));
        let view = ReportView::new(sample_report(), collab);

        assert_eq!(view.toggle_watchlist().await, ToggleOutcome::Failed);
        assert!(!ready(&view).header.watchlisted);
        assert_eq!(notifier.sent()[0].title, "Watchlist Error");
    }

    #[tokio::test]
    async fn test_factor_items_are_independent() {
        let (collab, _, _) =
            collaborators(RecordingStore::default(), Arc::new(ScriptedClipboard::default()));
        let mut view = ReportView::new(sample_report(), collab);

        // fixture: critical w/ details, high w/ impact, medium w/ evidence, low w/o details
        let expanded: Vec<bool> = ready(&view).factors.iter().map(|f| f.expanded).collect();
        assert_eq!(expanded, vec![true, true, false, false]);

        assert_eq!(view.toggle_factor(0), Some(false));
        assert_eq!(view.toggle_factor(2), Some(true));
        assert_eq!(view.toggle_factor(3), None);
        assert_eq!(view.toggle_factor(99), None);

        let expanded: Vec<bool> = ready(&view).factors.iter().map(|f| f.expanded).collect();
        assert_eq!(expanded, vec![false, true, true, false]);
    }

    #[tokio::test]
    async fn test_loading_screen() {
        let (collab, _, _) =
            collaborators(RecordingStore::default(), Arc::new(ScriptedClipboard::default()));
        let mut view = ReportView::new(sample_report(), collab);
        view.set_loading(true);
        assert!(matches!(view.screen(), ReportScreen::Loading));
        view.set_loading(false);
        assert!(matches!(view.screen(), ReportScreen::Ready(_)));
    }

    #[tokio::test]
    async fn test_logo_failure_uses_placeholder() {
        let (mut collab, _, _) =
            collaborators(RecordingStore::default(), Arc::new(ScriptedClipboard::default()));
        collab.assets = Arc::new(crate::testing::BrokenAssets);
        let mut view = ReportView::new(sample_report(), collab);

        view.load_logo().await;
        assert!(matches!(
            ready(&view).header.logo,
            view::Logo::Placeholder { initial: 'M', .. }
        ));
    }

    #[tokio::test]
    async fn test_notifier_not_used_on_successful_copy() {
        let notifier = Arc::new(RecordingNotifier::default());
        let collab = Collaborators {
            watchlist: Arc::new(RecordingStore::default()),
            notifier: notifier.clone(),
            clipboard: Arc::new(ScriptedClipboard::default()),
            assets: Arc::new(crate::testing::BrokenAssets),
        };
        let mut view = ReportView::new(sample_report(), collab);
        assert!(view.copy_address(CopyTarget::Token).await);
        assert!(notifier.sent().is_empty());
    }
}
