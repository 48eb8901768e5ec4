use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use uuid::Uuid;
use validator::Validate;

use crate::client::collaborators::{Confirmer, SessionProvider, SourceStore};
use crate::client::form::SourceForm;
use crate::client::notify::{Notification, Notifier};
use crate::error::{Error, Result};
use crate::models::job_source::JobSource;

/// Bumped after every successful create so list views know to refetch.
#[derive(Clone)]
pub struct RefreshSignal {
    tx: Arc<watch::Sender<u64>>,
}

impl RefreshSignal {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(0);
        Self { tx: Arc::new(tx) }
    }

    pub fn fire(&self) {
        self.tx.send_modify(|generation| *generation += 1);
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.tx.subscribe()
    }
}

impl Default for RefreshSignal {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Removed,
    Declined,
}

// Holds the submit control disabled until dropped.
struct InFlight(Arc<AtomicBool>);

impl InFlight {
    fn acquire(flag: &Arc<AtomicBool>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(Arc::clone(flag)))
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Client-side façade over the job source table.
///
/// Every operation reports its outcome through the [`Notifier`] and also
/// returns it, so callers can drive their own view state.
#[derive(Clone)]
pub struct SourceRegistry {
    session: Arc<dyn SessionProvider>,
    store: Arc<dyn SourceStore>,
    notifier: Arc<dyn Notifier>,
    refresh: RefreshSignal,
    submitting: Arc<AtomicBool>,
}

impl SourceRegistry {
    pub fn new(
        session: Arc<dyn SessionProvider>,
        store: Arc<dyn SourceStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            session,
            store,
            notifier,
            refresh: RefreshSignal::new(),
            submitting: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn refresh_signal(&self) -> &RefreshSignal {
        &self.refresh
    }

    /// True while a create request is pending; the submit control stays disabled.
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    /// Sources owned by the current user, newest first. Signed-out users get
    /// an empty list.
    pub async fn list_sources(&self) -> Result<Vec<JobSource>> {
        let Some(owner) = self.session.current_user().await else {
            tracing::warn!("Listing job sources without a session");
            self.notifier.notify(Notification::sign_in_to_view());
            return Ok(Vec::new());
        };

        match self.store.select_by_owner(owner).await {
            Ok(rows) => Ok(rows),
            Err(err) => {
                tracing::error!(error = ?err, user_id = %owner, "Failed to load job sources");
                self.notifier.notify(Notification::load_failed());
                Err(err)
            }
        }
    }

    /// Validates `form`, inserts it for the current user and resets it.
    ///
    /// Nothing is sent when validation fails or nobody is signed in, and the
    /// form is left untouched on any failure so the user can retry.
    pub async fn create_source(&self, form: &mut SourceForm) -> Result<JobSource> {
        let Some(_in_flight) = InFlight::acquire(&self.submitting) else {
            tracing::warn!("Ignoring duplicate job source submission");
            return Err(Error::SubmissionInFlight);
        };

        let payload = form.payload();
        if let Err(errors) = payload.validate() {
            let err = Error::from(errors);
            tracing::warn!(error = %err, "Rejected job source form");
            let notification = match &err {
                Error::InvalidUrl(_) => Notification::invalid_url(),
                _ => Notification::missing_fields(),
            };
            self.notifier.notify(notification);
            return Err(err);
        }

        let Some(owner) = self.session.current_user().await else {
            tracing::warn!("Job source submitted without a session");
            self.notifier.notify(Notification::sign_in_to_add());
            return Err(Error::NotAuthenticated);
        };

        let new_source = payload.into_new_source();
        match self.store.insert(owner, &new_source).await {
            Ok(row) => {
                self.notifier.notify(Notification::source_added(&row.name));
                form.reset();
                self.refresh.fire();
                Ok(row)
            }
            Err(err) => {
                tracing::error!(error = ?err, user_id = %owner, "Failed to add job source");
                self.notifier.notify(Notification::add_failed());
                Err(err)
            }
        }
    }

    /// Deletes a source once the user confirms. A declined prompt is a no-op.
    pub async fn delete_source(
        &self,
        id: Uuid,
        name: &str,
        confirmer: &dyn Confirmer,
    ) -> Result<DeleteOutcome> {
        let prompt = format!(
            "Are you sure you want to remove \"{}\" from your job sources?",
            name
        );
        if !confirmer.confirm(&prompt).await {
            return Ok(DeleteOutcome::Declined);
        }

        let Some(owner) = self.session.current_user().await else {
            tracing::warn!(source_id = %id, "Delete requested without a session");
            self.notifier.notify(Notification::sign_in_to_manage());
            return Err(Error::NotAuthenticated);
        };

        match self.store.delete(owner, id).await {
            Ok(()) => {
                self.notifier.notify(Notification::source_removed(name));
                Ok(DeleteOutcome::Removed)
            }
            Err(err) => {
                tracing::error!(error = ?err, source_id = %id, "Failed to remove job source");
                self.notifier.notify(Notification::remove_failed());
                Err(err)
            }
        }
    }
}
