use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::lead::{Lead, LeadId, LeadRepository, NewLead};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

fn map_error(err: sqlx::Error) -> DomainError {
    DomainError::Persistence(err.to_string())
}

#[derive(Clone)]
pub struct SqliteLeadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteLeadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct LeadRow {
    id: i64,
    title: String,
    slug: String,
    description: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<LeadRow> for Lead {
    type Error = DomainError;

    fn try_from(row: LeadRow) -> Result<Self, Self::Error> {
        Ok(Lead {
            id: LeadId::new(row.id)?,
            title: row.title,
            slug: row.slug,
            description: row.description,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl LeadRepository for SqliteLeadRepository {
    async fn insert(&self, lead: NewLead) -> DomainResult<Lead> {
        let row = sqlx::query_as::<_, LeadRow>(
            "INSERT INTO leads (title, slug, description, created_at) VALUES (?, ?, ?, ?) RETURNING id, title, slug, description, created_at",
        )
        .bind(&lead.title)
        .bind(&lead.slug)
        .bind(&lead.description)
        .bind(lead.created_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_error)?;

        Lead::try_from(row)
    }
}
