use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::project::{
    NewProject, Project, ProjectDescription, ProjectId, ProjectReadRepository, ProjectSlug,
    ProjectTitle, ProjectUpdate, ProjectWriteRepository, TechnologySyncPlan,
};
use crate::domain::project_type::ProjectTypeId;
use crate::domain::technology::TechnologyId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::collections::BTreeSet;
use std::sync::Arc;

fn map_error(err: sqlx::Error) -> DomainError {
    // The slug probe is only a fast path; under concurrent writes the UNIQUE
    // index has the final say and its verdict is a conflict, not a crash.
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return DomainError::Conflict(db_err.to_string());
        }
    }
    DomainError::Persistence(err.to_string())
}

#[derive(Clone)]
pub struct SqliteProjectWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteProjectWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteProjectReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteProjectReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProjectRow {
    id: i64,
    title: String,
    slug: String,
    description: String,
    cover_image: Option<String>,
    type_id: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProjectRow> for Project {
    type Error = DomainError;

    fn try_from(row: ProjectRow) -> Result<Self, Self::Error> {
        Ok(Project {
            id: ProjectId::new(row.id)?,
            title: ProjectTitle::new(row.title)?,
            slug: ProjectSlug::new(row.slug)?,
            description: ProjectDescription::new(row.description)?,
            cover_image: row.cover_image,
            type_id: row.type_id.map(ProjectTypeId::new).transpose()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

const PROJECT_COLUMNS: &str =
    "id, title, slug, description, cover_image, type_id, created_at, updated_at";

#[async_trait]
impl ProjectWriteRepository for SqliteProjectWriteRepository {
    async fn insert(&self, project: NewProject) -> DomainResult<Project> {
        let NewProject {
            title,
            slug,
            description,
            cover_image,
            type_id,
            created_at,
            updated_at,
        } = project;

        let row = sqlx::query_as::<_, ProjectRow>(
            "INSERT INTO projects (title, slug, description, cover_image, type_id, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING id, title, slug, description, cover_image, type_id, created_at, updated_at",
        )
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(description.as_str())
        .bind(cover_image.as_deref())
        .bind(type_id.map(i64::from))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_error)?;

        Project::try_from(row)
    }

    async fn update(&self, update: ProjectUpdate) -> DomainResult<Project> {
        let ProjectUpdate {
            id,
            title,
            slug,
            description,
            cover_image,
            type_id,
            updated_at,
        } = update;

        let row = sqlx::query_as::<_, ProjectRow>(
            "UPDATE projects SET title = ?, slug = ?, description = ?, cover_image = COALESCE(?, cover_image), type_id = ?, updated_at = ? WHERE id = ? RETURNING id, title, slug, description, cover_image, type_id, created_at, updated_at",
        )
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(description.as_str())
        .bind(cover_image.as_deref())
        .bind(type_id.map(i64::from))
        .bind(updated_at)
        .bind(i64::from(id))
        .fetch_one(&*self.pool)
        .await
        .map_err(map_error)?;

        Project::try_from(row)
    }

    async fn delete(&self, id: ProjectId) -> DomainResult<()> {
        // Pivot rows disappear through ON DELETE CASCADE.
        sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_error)?;
        Ok(())
    }

    async fn sync_technologies(
        &self,
        id: ProjectId,
        plan: &TechnologySyncPlan,
    ) -> DomainResult<()> {
        if plan.is_noop() {
            return Ok(());
        }

        let mut tx = self.pool.begin().await.map_err(map_error)?;
        let project_id = i64::from(id);

        if !plan.to_remove.is_empty() {
            let mut builder: QueryBuilder<Sqlite> =
                QueryBuilder::new("DELETE FROM project_technology WHERE project_id = ");
            builder.push_bind(project_id);
            builder.push(" AND technology_id IN (");
            let mut separated = builder.separated(", ");
            for tech in &plan.to_remove {
                separated.push_bind(i64::from(*tech));
            }
            builder.push(")");
            builder
                .build()
                .execute(&mut *tx)
                .await
                .map_err(map_error)?;
        }

        if !plan.to_add.is_empty() {
            let mut builder: QueryBuilder<Sqlite> =
                QueryBuilder::new("INSERT INTO project_technology (project_id, technology_id) ");
            builder.push_values(plan.to_add.iter(), |mut row, tech| {
                row.push_bind(project_id).push_bind(i64::from(*tech));
            });
            builder
                .build()
                .execute(&mut *tx)
                .await
                .map_err(map_error)?;
        }

        tx.commit().await.map_err(map_error)
    }
}

#[async_trait]
impl ProjectReadRepository for SqliteProjectReadRepository {
    async fn find_by_id(&self, id: ProjectId) -> DomainResult<Option<Project>> {
        let row = sqlx::query_as::<_, ProjectRow>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_error)?;

        row.map(Project::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &ProjectSlug) -> DomainResult<Option<Project>> {
        let row = sqlx::query_as::<_, ProjectRow>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE slug = ?"
        ))
        .bind(slug.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_error)?;

        row.map(Project::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Project>> {
        let rows = sqlx::query_as::<_, ProjectRow>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_error)?;

        rows.into_iter().map(Project::try_from).collect()
    }

    async fn technology_ids(&self, id: ProjectId) -> DomainResult<BTreeSet<TechnologyId>> {
        let ids: Vec<i64> = sqlx::query_scalar(
            "SELECT technology_id FROM project_technology WHERE project_id = ?",
        )
        .bind(i64::from(id))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_error)?;

        ids.into_iter().map(TechnologyId::new).collect()
    }
}
