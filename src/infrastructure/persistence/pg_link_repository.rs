//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    code: String,
    white_url: String,
    black_url: String,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(r: LinkRow) -> Self {
        Link::new(r.id, r.code, r.white_url, r.black_url, r.created_at)
    }
}

/// PostgreSQL repository for link storage and retrieval.
///
/// Code uniqueness is enforced by the `links_code_key` constraint; a
/// violation surfaces as [`AppError::Conflict`].
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (code, white_url, black_url)
            VALUES ($1, $2, $3)
            RETURNING id, code, white_url, black_url, created_at
            "#,
        )
        .bind(new_link.code)
        .bind(new_link.white_url)
        .bind(new_link.black_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, code, white_url, black_url, created_at
            FROM links
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn code_exists(&self, code: &str) -> Result<bool, AppError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM links WHERE code = $1)")
                .bind(code)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(exists)
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Link>, AppError> {
        let rows = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, code, white_url, black_url, created_at
            FROM links
            ORDER BY id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
