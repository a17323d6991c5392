/// Category of a notification. The report view only raises system notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    Low,
    Medium,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub priority: Priority,
}

impl Notification {
    pub fn system(title: &str, message: impl Into<String>, priority: Priority) -> Self {
        Self {
            kind: NotificationKind::System,
            title: title.to_string(),
            message: message.into(),
            priority,
        }
    }
}

/// Fire-and-forget sink for user-facing notices. Implementations must not fail
/// observably.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}
