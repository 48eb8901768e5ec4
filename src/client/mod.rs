//! Source registry client: the façade the "your job sources" screens use to
//! talk to the owned job source table.

pub mod collaborators;
pub mod form;
pub mod list_view;
pub mod notify;
pub mod registry;

#[cfg(test)]
pub(crate) mod test_support;

pub use collaborators::{Confirmer, SessionProvider, SourceStore, StaticSession};
pub use form::SourceForm;
pub use list_view::{ListState, SourceListView};
pub use notify::{Notification, Notifier, Severity, TracingNotifier};
pub use registry::{DeleteOutcome, RefreshSignal, SourceRegistry};
