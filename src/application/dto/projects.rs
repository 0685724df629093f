use crate::domain::project::Project;
use crate::domain::technology::TechnologyId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProjectDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_id: Option<i64>,
    /// Identifiers of the associated technology tags, ascending.
    pub technologies: Vec<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProjectDto {
    pub fn from_parts(project: Project, technologies: BTreeSet<TechnologyId>) -> Self {
        Self {
            id: project.id.into(),
            title: project.title.into(),
            slug: project.slug.into(),
            description: project.description.into(),
            cover_image: project.cover_image,
            type_id: project.type_id.map(Into::into),
            technologies: technologies.into_iter().map(Into::into).collect(),
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}
