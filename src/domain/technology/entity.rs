// src/domain/technology/entity.rs
use crate::domain::technology::value_objects::TechnologyId;

/// Read-only reference entity; populates tag choices in the admin forms.
#[derive(Debug, Clone)]
pub struct Technology {
    pub id: TechnologyId,
    pub name: String,
}
