use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::report::types::CopyTarget;

/// How long the "Copied" indicator stays up after a successful copy.
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_millis(2000);

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard command failed to start: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("Clipboard command exited with status {0}")]
    Status(i32),

    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
}

/// System clipboard.
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyState {
    #[default]
    Idle,
    Copied(CopyTarget),
}

impl CopyState {
    pub fn copied(&self) -> Option<CopyTarget> {
        match self {
            CopyState::Idle => None,
            CopyState::Copied(target) => Some(*target),
        }
    }
}

#[derive(Debug, Default)]
struct Stamped {
    state: CopyState,
    generation: u64,
}

/// Transient "Copied" indicator. At most one field shows it; each success
/// restarts the reset timer, and dropping the feedback cancels it.
///
/// Must be driven from inside a tokio runtime.
#[derive(Debug)]
pub struct CopyFeedback {
    state: Arc<watch::Sender<Stamped>>,
    reset: Option<JoinHandle<()>>,
    duration: Duration,
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::with_duration(COPY_FEEDBACK_DURATION)
    }
}

impl CopyFeedback {
    pub fn with_duration(duration: Duration) -> Self {
        let (tx, _rx) = watch::channel(Stamped::default());
        Self {
            state: Arc::new(tx),
            reset: None,
            duration,
        }
    }

    pub fn state(&self) -> CopyState {
        self.state.borrow().state
    }

    /// `idle | copied(other) -> copied(target)`, then back to idle after the timer.
    pub fn succeeded(&mut self, target: CopyTarget) {
        self.cancel_reset();
        let mut generation = 0;
        self.state.send_modify(|s| {
            s.generation += 1;
            s.state = CopyState::Copied(target);
            generation = s.generation;
        });

        let state = Arc::clone(&self.state);
        let duration = self.duration;
        self.reset = Some(tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            state.send_if_modified(|s| {
                if s.generation != generation {
                    return false;
                }
                s.state = CopyState::Idle;
                true
            });
            debug!(copy_target = %target, "copy feedback expired");
        }));
    }

    /// A failed write leaves the indicator idle.
    pub fn failed(&mut self) {
        self.cancel_reset();
        self.state.send_modify(|s| {
            s.generation += 1;
            s.state = CopyState::Idle;
        });
    }

    fn cancel_reset(&mut self) {
        if let Some(handle) = self.reset.take() {
            handle.abort();
        }
    }
}

impl Drop for CopyFeedback {
    fn drop(&mut self) {
        self.cancel_reset();
    }
}
