use colored::Colorize;
use tracing::{info, warn};

use crate::interact::notify::{Notification, NotificationSink, Priority};

/// Prints notifications to stderr and mirrors them into the log.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    fn line(notification: &Notification) -> String {
        let title = match notification.priority {
            Priority::Low => notification.title.cyan().bold(),
            Priority::Medium => notification.title.yellow().bold(),
        };
        format!("{}: {}", title, notification.message)
    }
}

impl NotificationSink for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        match notification.priority {
            Priority::Low => {
                info!(title = %notification.title, kind = ?notification.kind, "notification")
            }
            Priority::Medium => {
                warn!(title = %notification.title, priority = %notification.priority, "notification")
            }
        }
        eprintln!("{}", Self::line(&notification));
    }
}
