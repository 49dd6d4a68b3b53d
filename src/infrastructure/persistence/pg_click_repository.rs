//! PostgreSQL implementation of click repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::sync::Arc;

use crate::domain::click_filter::{ClickFilter, ClickPredicate};
use crate::domain::entities::{Click, CountryCount, NewClick};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

const CLICK_COLUMNS: &str = "id, ip, user_agent, country, is_bot, link_id, created_at";

#[derive(sqlx::FromRow)]
struct ClickRow {
    id: i64,
    ip: String,
    user_agent: String,
    country: String,
    is_bot: bool,
    link_id: i64,
    created_at: DateTime<Utc>,
}

impl From<ClickRow> for Click {
    fn from(r: ClickRow) -> Self {
        Click::new(
            r.id,
            r.ip,
            r.user_agent,
            r.country,
            r.is_bot,
            r.link_id,
            r.created_at,
        )
    }
}

/// Appends `WHERE p1 AND p2 ...` with every predicate bound as a parameter.
fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &ClickFilter) {
    for (i, predicate) in filter.predicates().iter().enumerate() {
        builder
            .push(if i == 0 { " WHERE " } else { " AND " })
            .push(predicate.column())
            .push(" = ");

        match predicate {
            ClickPredicate::LinkId(link_id) => builder.push_bind(*link_id),
            ClickPredicate::Country(country) => builder.push_bind(country.clone()),
            ClickPredicate::IsBot(is_bot) => builder.push_bind(*is_bot),
        };
    }
}

/// PostgreSQL repository for the click log.
///
/// Page and count queries are both assembled by [`push_filter`] from the
/// same [`ClickFilter`].
pub struct PgClickRepository {
    pool: Arc<PgPool>,
}

impl PgClickRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    async fn record(&self, new_click: NewClick) -> Result<Click, AppError> {
        let row = sqlx::query_as::<_, ClickRow>(
            r#"
            INSERT INTO clicks (ip, user_agent, country, is_bot, link_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, ip, user_agent, country, is_bot, link_id, created_at
            "#,
        )
        .bind(new_click.ip)
        .bind(new_click.user_agent)
        .bind(new_click.country)
        .bind(new_click.is_bot)
        .bind(new_click.link_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list(
        &self,
        filter: &ClickFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Click>, AppError> {
        let mut builder =
            QueryBuilder::<Postgres>::new(format!("SELECT {CLICK_COLUMNS} FROM clicks"));
        push_filter(&mut builder, filter);
        builder
            .push(" ORDER BY id DESC LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);

        let rows = builder
            .build_query_as::<ClickRow>()
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Click::from).collect())
    }

    async fn count(&self, filter: &ClickFilter) -> Result<i64, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM clicks");
        push_filter(&mut builder, filter);

        let count = builder
            .build_query_scalar::<i64>()
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn distinct_countries(&self) -> Result<Vec<String>, AppError> {
        let countries =
            sqlx::query_scalar::<_, String>("SELECT DISTINCT country FROM clicks ORDER BY country")
                .fetch_all(self.pool.as_ref())
                .await?;

        Ok(countries)
    }

    async fn count_by_country(&self, link_id: i64) -> Result<Vec<CountryCount>, AppError> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            r#"
            SELECT country, COUNT(*) AS clicks
            FROM clicks
            WHERE link_id = $1
            GROUP BY country
            ORDER BY clicks DESC, country ASC
            "#,
        )
        .bind(link_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|(country, count)| CountryCount { country, count })
            .collect())
    }
}
