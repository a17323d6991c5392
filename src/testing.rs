//! Test doubles for the report view's collaborators.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::interact::assets::{AssetError, AssetLoader};
use crate::interact::copy::{Clipboard, ClipboardError};
use crate::interact::notify::{Notification, NotificationSink};
use crate::interact::watchlist::{WatchlistError, WatchlistStore};
use crate::interact::Collaborators;
use crate::report::types::{TokenReport, WatchlistEntry};

pub fn sample_report() -> TokenReport {
    crate::report::parse(include_str!("../tests/fixtures/sample_report.json")).unwrap()
}

/// Wire up collaborators around a store and clipboard, returning handles to the
/// store and notifier for assertions.
pub fn collaborators(
    store: RecordingStore,
    clipboard: Arc<ScriptedClipboard>,
) -> (Collaborators, Arc<RecordingStore>, Arc<RecordingNotifier>) {
    let store = Arc::new(store);
    let notifier = Arc::new(RecordingNotifier::default());
    let collab = Collaborators {
        watchlist: store.clone(),
        notifier: notifier.clone(),
        clipboard,
        assets: Arc::new(LoadedAssets),
    };
    (collab, store, notifier)
}

/// Watchlist store that records every call and can be told to fail.
#[derive(Default)]
pub struct RecordingStore {
    members: Mutex<HashSet<String>>,
    adds: Mutex<Vec<(String, WatchlistEntry)>>,
    removes: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingStore {
    pub fn with_member(address: &str) -> Self {
        let store = Self::default();
        store.members.lock().unwrap().insert(address.to_string());
        store
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn adds(&self) -> Vec<(String, WatchlistEntry)> {
        self.adds.lock().unwrap().clone()
    }

    pub fn removes(&self) -> Vec<String> {
        self.removes.lock().unwrap().clone()
    }
}

#[async_trait]
impl WatchlistStore for RecordingStore {
    fn is_member(&self, address: &str) -> bool {
        self.members.lock().unwrap().contains(address)
    }

    async fn add(&self, address: &str, entry: WatchlistEntry) -> Result<(), WatchlistError> {
        self.adds.lock().unwrap().push((address.to_string(), entry));
        if self.fail {
            return Err(WatchlistError::Unavailable("store offline".to_string()));
        }
        self.members.lock().unwrap().insert(address.to_string());
        Ok(())
    }

    async fn remove(&self, address: &str) -> Result<(), WatchlistError> {
        self.removes.lock().unwrap().push(address.to_string());
        if self.fail {
            return Err(WatchlistError::Unavailable("store offline".to_string()));
        }
        self.members.lock().unwrap().remove(address);
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }
}

impl NotificationSink for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.sent.lock().unwrap().push(notification);
    }
}

#[derive(Default)]
pub struct ScriptedClipboard {
    written: Mutex<Vec<String>>,
    fail: bool,
}

impl ScriptedClipboard {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn written(&self) -> Vec<String> {
        self.written.lock().unwrap().clone()
    }
}

#[async_trait]
impl Clipboard for ScriptedClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Unavailable("permission denied".to_string()));
        }
        self.written.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

pub struct LoadedAssets;

#[async_trait]
impl AssetLoader for LoadedAssets {
    async fn load(&self, _uri: &str) -> Result<(), AssetError> {
        Ok(())
    }
}

pub struct BrokenAssets;

#[async_trait]
impl AssetLoader for BrokenAssets {
    async fn load(&self, uri: &str) -> Result<(), AssetError> {
        Err(AssetError::Unavailable(uri.to_string()))
    }
}
