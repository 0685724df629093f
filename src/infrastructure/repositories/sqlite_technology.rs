use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::technology::{Technology, TechnologyId, TechnologyRepository};
use async_trait::async_trait;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::collections::BTreeSet;
use std::sync::Arc;

fn map_error(err: sqlx::Error) -> DomainError {
    DomainError::Persistence(err.to_string())
}

#[derive(Clone)]
pub struct SqliteTechnologyRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteTechnologyRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TechnologyRow {
    id: i64,
    name: String,
}

impl TryFrom<TechnologyRow> for Technology {
    type Error = DomainError;

    fn try_from(row: TechnologyRow) -> Result<Self, Self::Error> {
        Ok(Technology {
            id: TechnologyId::new(row.id)?,
            name: row.name,
        })
    }
}

#[async_trait]
impl TechnologyRepository for SqliteTechnologyRepository {
    async fn list(&self) -> DomainResult<Vec<Technology>> {
        let rows = sqlx::query_as::<_, TechnologyRow>(
            "SELECT id, name FROM technologies ORDER BY name",
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(map_error)?;

        rows.into_iter().map(Technology::try_from).collect()
    }

    async fn filter_existing(
        &self,
        ids: &BTreeSet<TechnologyId>,
    ) -> DomainResult<BTreeSet<TechnologyId>> {
        if ids.is_empty() {
            return Ok(BTreeSet::new());
        }

        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT id FROM technologies WHERE id IN (");
        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(i64::from(*id));
        }
        builder.push(")");

        let found: Vec<i64> = builder
            .build_query_scalar()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_error)?;

        found.into_iter().map(TechnologyId::new).collect()
    }
}
