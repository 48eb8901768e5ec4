use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::client::collaborators::SourceStore;
use crate::error::{Error, Result};
use crate::models::job_source::{JobSource, NewJobSource};

/// Postgres-backed `job_sources` table. Every query is scoped to the owner.
#[derive(Clone)]
pub struct JobSourceService {
    pool: PgPool,
}

impl JobSourceService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, owner: Uuid, source: &NewJobSource) -> Result<JobSource> {
        let row = sqlx::query_as::<_, JobSource>(
            r#"
            INSERT INTO job_sources (user_id, name, url, source_type)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, name, url, source_type, is_active, created_at
            "#,
        )
        .bind(owner)
        .bind(&source.name)
        .bind(&source.url)
        .bind(source.source_type)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(source_id = %row.id, user_id = %owner, "Job source created");
        Ok(row)
    }

    pub async fn list_for_owner(&self, owner: Uuid) -> Result<Vec<JobSource>> {
        let rows = sqlx::query_as::<_, JobSource>(
            r#"
            SELECT id, user_id, name, url, source_type, is_active, created_at
            FROM job_sources
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Rows owned by someone else are reported as not found.
    pub async fn delete(&self, owner: Uuid, id: Uuid) -> Result<()> {
        let res = sqlx::query("DELETE FROM job_sources WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner)
            .execute(&self.pool)
            .await?;

        if res.rows_affected() == 0 {
            return Err(Error::NotFound(format!("Job source {} not found", id)));
        }
        tracing::info!(source_id = %id, user_id = %owner, "Job source deleted");
        Ok(())
    }
}

#[async_trait]
impl SourceStore for JobSourceService {
    async fn insert(&self, owner: Uuid, source: &NewJobSource) -> Result<JobSource> {
        self.create(owner, source).await
    }

    async fn select_by_owner(&self, owner: Uuid) -> Result<Vec<JobSource>> {
        self.list_for_owner(owner).await
    }

    async fn delete(&self, owner: Uuid, id: Uuid) -> Result<()> {
        JobSourceService::delete(self, owner, id).await
    }
}
