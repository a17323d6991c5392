use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::interact::watchlist::{WatchlistError, WatchlistStore};
use crate::report::types::WatchlistEntry;

type Entries = BTreeMap<String, WatchlistEntry>;

/// Watchlist kept in memory, optionally mirrored to a JSON file after every change.
#[derive(Debug, Default)]
pub struct LocalWatchlist {
    path: Option<PathBuf>,
    entries: Mutex<Entries>,
}

impl LocalWatchlist {
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Open a file-backed watchlist. A missing file starts empty.
    pub fn open(path: &Path) -> Result<Self, WatchlistError> {
        let entries = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            serde_json::from_str(&contents)?
        } else {
            Entries::new()
        };
        debug!(path = %path.display(), entries = entries.len(), "opened watchlist");
        Ok(Self {
            path: Some(path.to_path_buf()),
            entries: Mutex::new(entries),
        })
    }

    pub fn len(&self) -> usize {
        self.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Entries>, WatchlistError> {
        self.entries
            .lock()
            .map_err(|_| WatchlistError::Unavailable("watchlist lock poisoned".to_string()))
    }

    async fn persist(&self, snapshot: Entries) -> Result<(), WatchlistError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let json = serde_json::to_string_pretty(&snapshot)?;
        tokio::fs::write(path, json).await?;
        debug!(path = %path.display(), entries = snapshot.len(), "watchlist saved");
        Ok(())
    }
}

#[async_trait]
impl WatchlistStore for LocalWatchlist {
    fn is_member(&self, address: &str) -> bool {
        self.lock()
            .map(|entries| entries.contains_key(address))
            .unwrap_or(false)
    }

    #[instrument(skip(self, entry))]
    async fn add(&self, address: &str, entry: WatchlistEntry) -> Result<(), WatchlistError> {
        let (snapshot, previous) = {
            let mut entries = self.lock()?;
            let previous = entries.insert(address.to_string(), entry);
            (entries.clone(), previous)
        };
        if let Err(err) = self.persist(snapshot).await {
            let mut entries = self.lock()?;
            match previous {
                Some(previous) => entries.insert(address.to_string(), previous),
                None => entries.remove(address),
            };
            return Err(err);
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove(&self, address: &str) -> Result<(), WatchlistError> {
        let (snapshot, previous) = {
            let mut entries = self.lock()?;
            let previous = entries.remove(address);
            (entries.clone(), previous)
        };
        if let Err(err) = self.persist(snapshot).await {
            if let Some(previous) = previous {
                self.lock()?.insert(address.to_string(), previous);
            }
            return Err(err);
        }
        Ok(())
    }
}
