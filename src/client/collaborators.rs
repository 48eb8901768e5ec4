//! Seams the source registry depends on. Each one is injected so the
//! registry never reaches for ambient state.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::middleware::auth::Claims;
use crate::models::job_source::{JobSource, NewJobSource};

/// Resolves the authenticated user at call time.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn current_user(&self) -> Option<Uuid>;
}

/// Owner-scoped table of job sources.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SourceStore: Send + Sync {
    async fn insert(&self, owner: Uuid, source: &NewJobSource) -> Result<JobSource>;

    /// Rows owned by `owner`, newest first.
    async fn select_by_owner(&self, owner: Uuid) -> Result<Vec<JobSource>>;

    async fn delete(&self, owner: Uuid, id: Uuid) -> Result<()>;
}

/// Asks the user to approve an irreversible action.
#[async_trait]
pub trait Confirmer: Send + Sync {
    async fn confirm(&self, prompt: &str) -> bool;
}

/// A session whose user is fixed up front, e.g. from a verified token.
#[derive(Debug, Clone, Default)]
pub struct StaticSession {
    user: Option<Uuid>,
}

impl StaticSession {
    pub fn signed_in(user: Uuid) -> Self {
        Self { user: Some(user) }
    }

    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn from_claims(claims: &Claims) -> Self {
        Self {
            user: claims.user_id().ok(),
        }
    }
}

#[async_trait]
impl SessionProvider for StaticSession {
    async fn current_user(&self) -> Option<Uuid> {
        self.user
    }
}
