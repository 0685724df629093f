// src/domain/project/entity.rs
use crate::domain::project::value_objects::{
    ProjectDescription, ProjectId, ProjectSlug, ProjectTitle,
};
use crate::domain::project_type::ProjectTypeId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Project {
    pub id: ProjectId,
    pub title: ProjectTitle,
    pub slug: ProjectSlug,
    pub description: ProjectDescription,
    pub cover_image: Option<String>,
    pub type_id: Option<ProjectTypeId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewProject {
    pub title: ProjectTitle,
    pub slug: ProjectSlug,
    pub description: ProjectDescription,
    pub cover_image: Option<String>,
    pub type_id: Option<ProjectTypeId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full-replace update of a project's form fields. `cover_image` is `None`
/// when no new upload was submitted, in which case the stored path is kept.
#[derive(Debug, Clone)]
pub struct ProjectUpdate {
    pub id: ProjectId,
    pub title: ProjectTitle,
    pub slug: ProjectSlug,
    pub description: ProjectDescription,
    pub cover_image: Option<String>,
    pub type_id: Option<ProjectTypeId>,
    pub updated_at: DateTime<Utc>,
}
