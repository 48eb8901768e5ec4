use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Normal,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn normal(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Normal,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Destructive,
        }
    }

    pub(crate) fn load_failed() -> Self {
        Self::destructive("Error", "Failed to load job sources.")
    }

    pub(crate) fn sign_in_to_view() -> Self {
        Self::destructive(
            "Authentication required",
            "Please sign in to view your job sources.",
        )
    }

    pub(crate) fn missing_fields() -> Self {
        Self::destructive("Missing fields", "Please fill in all required fields.")
    }

    pub(crate) fn invalid_url() -> Self {
        Self::destructive("Invalid URL", "Please enter a valid website URL.")
    }

    pub(crate) fn sign_in_to_add() -> Self {
        Self::destructive(
            "Authentication required",
            "Please sign in to add job sources.",
        )
    }

    pub(crate) fn source_added(name: &str) -> Self {
        Self::normal(
            "Source added",
            format!("{} has been added to your job sources.", name),
        )
    }

    pub(crate) fn add_failed() -> Self {
        Self::destructive("Error", "Failed to add job source. Please try again.")
    }

    pub(crate) fn sign_in_to_manage() -> Self {
        Self::destructive(
            "Authentication required",
            "Please sign in to manage job sources.",
        )
    }

    pub(crate) fn source_removed(name: &str) -> Self {
        Self::normal(
            "Source removed",
            format!("{} has been removed from your job sources.", name),
        )
    }

    pub(crate) fn remove_failed() -> Self {
        Self::destructive("Error", "Failed to remove job source.")
    }
}

/// Fire-and-forget notification surface.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Reports notifications as log events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, n: Notification) {
        match n.severity {
            Severity::Normal => {
                tracing::info!(title = %n.title, description = %n.description, "notification")
            }
            Severity::Destructive => {
                tracing::warn!(title = %n.title, description = %n.description, "notification")
            }
        }
    }
}
