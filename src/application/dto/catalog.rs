use crate::domain::project_type::ProjectType;
use crate::domain::technology::Technology;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TechnologyDto {
    pub id: i64,
    pub name: String,
}

impl From<Technology> for TechnologyDto {
    fn from(technology: Technology) -> Self {
        Self {
            id: technology.id.into(),
            name: technology.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProjectTypeDto {
    pub id: i64,
    pub name: String,
}

impl From<ProjectType> for ProjectTypeDto {
    fn from(project_type: ProjectType) -> Self {
        Self {
            id: project_type.id.into(),
            name: project_type.name,
        }
    }
}
