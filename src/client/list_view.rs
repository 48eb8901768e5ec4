use tokio::sync::watch;
use uuid::Uuid;

use crate::client::collaborators::Confirmer;
use crate::client::registry::{DeleteOutcome, SourceRegistry};
use crate::error::{Error, Result};
use crate::models::job_source::JobSource;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListState<'a> {
    Loading,
    Loaded(&'a [JobSource]),
}

/// The "your job sources" list. Only this view's own completions mutate the
/// rows it shows.
pub struct SourceListView {
    registry: SourceRegistry,
    refresh: watch::Receiver<u64>,
    sources: Vec<JobSource>,
    loading: bool,
}

impl SourceListView {
    /// Starts in `Loading`; call [`SourceListView::load`] to fetch.
    pub fn new(registry: SourceRegistry) -> Self {
        let refresh = registry.refresh_signal().subscribe();
        Self {
            registry,
            refresh,
            sources: Vec::new(),
            loading: true,
        }
    }

    pub fn state(&self) -> ListState<'_> {
        if self.loading {
            ListState::Loading
        } else {
            ListState::Loaded(&self.sources)
        }
    }

    /// Loaded with nothing to show: render the "no sources yet" state.
    pub fn is_empty_state(&self) -> bool {
        !self.loading && self.sources.is_empty()
    }

    /// Fetches the current user's sources. A failed fetch keeps whatever was
    /// shown before.
    pub async fn load(&mut self) {
        self.loading = true;
        if let Ok(rows) = self.registry.list_sources().await {
            self.sources = rows;
        }
        self.loading = false;
    }

    /// Reloads if a create happened since the last look. Returns whether it did.
    pub async fn refresh_if_signalled(&mut self) -> bool {
        if !self.refresh.has_changed().unwrap_or(false) {
            return false;
        }
        self.refresh.borrow_and_update();
        self.load().await;
        true
    }

    /// Waits for the next refresh signal and reloads.
    pub async fn follow_refresh(&mut self) -> Result<()> {
        self.refresh
            .changed()
            .await
            .map_err(|_| Error::Internal("refresh signal closed".to_string()))?;
        self.load().await;
        Ok(())
    }

    /// Removes the row after the store acknowledges the delete; no refetch.
    pub async fn delete(&mut self, id: Uuid, confirmer: &dyn Confirmer) -> Result<DeleteOutcome> {
        let name = self
            .sources
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.name.clone())
            .ok_or_else(|| Error::NotFound(format!("Job source {} not listed", id)))?;

        let outcome = self.registry.delete_source(id, &name, confirmer).await?;
        if outcome == DeleteOutcome::Removed {
            self.sources.retain(|s| s.id != id);
        }
        Ok(outcome)
    }
}
