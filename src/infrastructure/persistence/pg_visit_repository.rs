//! PostgreSQL implementation of visit repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewVisit, Visit};
use crate::domain::repositories::VisitRepository;
use crate::error::AppError;

/// PostgreSQL repository for visit records.
pub struct PgVisitRepository {
    pool: Arc<PgPool>,
}

impl PgVisitRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct VisitRow {
    id: i64,
    link_id: i64,
    ip: String,
    user_agent: Option<String>,
    referer: Option<String>,
    status: i32,
    created_at: DateTime<Utc>,
}

impl From<VisitRow> for Visit {
    fn from(r: VisitRow) -> Self {
        Visit {
            id: r.id,
            link_id: r.link_id,
            ip: r.ip,
            user_agent: r.user_agent,
            referer: r.referer,
            status: r.status,
            created_at: r.created_at,
        }
    }
}

#[async_trait]
impl VisitRepository for PgVisitRepository {
    async fn insert(&self, new_visit: NewVisit) -> Result<Visit, AppError> {
        let row = sqlx::query_as::<_, VisitRow>(
            r#"
            INSERT INTO link_visits (link_id, ip, user_agent, referer, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, link_id, ip, user_agent, referer, status, created_at
            "#,
        )
        .bind(new_visit.link_id)
        .bind(&new_visit.ip)
        .bind(&new_visit.user_agent)
        .bind(&new_visit.referer)
        .bind(new_visit.status)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list_all(&self) -> Result<Vec<Visit>, AppError> {
        let rows = sqlx::query_as::<_, VisitRow>(
            r#"
            SELECT id, link_id, ip, user_agent, referer, status, created_at
            FROM link_visits
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Visit::from).collect())
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Visit>, AppError> {
        let rows = sqlx::query_as::<_, VisitRow>(
            r#"
            SELECT id, link_id, ip, user_agent, referer, status, created_at
            FROM link_visits
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Visit::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM link_visits")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn list_by_link(&self, link_id: i64) -> Result<Vec<Visit>, AppError> {
        let rows = sqlx::query_as::<_, VisitRow>(
            r#"
            SELECT id, link_id, ip, user_agent, referer, status, created_at
            FROM link_visits
            WHERE link_id = $1
            ORDER BY id
            "#,
        )
        .bind(link_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Visit::from).collect())
    }
}
