// src/domain/project_type/entity.rs
use crate::domain::project_type::value_objects::ProjectTypeId;

/// Read-only reference entity; populates the type select in the admin forms.
#[derive(Debug, Clone)]
pub struct ProjectType {
    pub id: ProjectTypeId,
    pub name: String,
}
