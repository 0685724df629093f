use crate::domain::errors::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProjectTypeId(pub i64);

impl ProjectTypeId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "project type id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ProjectTypeId> for i64 {
    fn from(value: ProjectTypeId) -> Self {
        value.0
    }
}
