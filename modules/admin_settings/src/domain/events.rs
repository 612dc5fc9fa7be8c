//! User-facing notifications for settings changes
//!
//! The admin console renders these as toasts:
//! - `Variant::Default`: the change was applied
//! - `Variant::Destructive`: the change was rejected or failed

use serde::{Deserialize, Serialize};

/// Toast styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Default,
    Destructive,
}

/// A single toast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Short headline
    pub title: String,
    /// Detail line
    pub description: String,
    /// Styling
    pub variant: Variant,
}

impl Notification {
    /// Informational toast
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Variant::Default,
        }
    }

    /// Error toast
    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Variant::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == Variant::Destructive
    }
}

/// Notification sink
///
/// Fire-and-forget: implementations must not block and have no way to
/// report failure back to the caller.
pub trait Notifier: Send + Sync {
    /// Show a notification
    fn notify(&self, notification: Notification);
}

/// No-op notifier for headless use or when toasts are disabled
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpNotifier;

impl Notifier for NoOpNotifier {
    fn notify(&self, notification: Notification) {
        tracing::trace!(title = %notification.title, "notification dropped");
    }
}
