use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::project_type::{ProjectType, ProjectTypeId, ProjectTypeRepository};
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

fn map_error(err: sqlx::Error) -> DomainError {
    DomainError::Persistence(err.to_string())
}

#[derive(Clone)]
pub struct SqliteProjectTypeRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteProjectTypeRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProjectTypeRow {
    id: i64,
    name: String,
}

impl TryFrom<ProjectTypeRow> for ProjectType {
    type Error = DomainError;

    fn try_from(row: ProjectTypeRow) -> Result<Self, Self::Error> {
        Ok(ProjectType {
            id: ProjectTypeId::new(row.id)?,
            name: row.name,
        })
    }
}

#[async_trait]
impl ProjectTypeRepository for SqliteProjectTypeRepository {
    async fn list(&self) -> DomainResult<Vec<ProjectType>> {
        let rows =
            sqlx::query_as::<_, ProjectTypeRow>("SELECT id, name FROM types ORDER BY name")
                .fetch_all(&*self.pool)
                .await
                .map_err(map_error)?;

        rows.into_iter().map(ProjectType::try_from).collect()
    }

    async fn exists(&self, id: ProjectTypeId) -> DomainResult<bool> {
        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM types WHERE id = ?")
            .bind(i64::from(id))
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_error)?;
        Ok(found.is_some())
    }
}
