use crate::domain::errors::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TechnologyId(pub i64);

impl TechnologyId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "technology id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<TechnologyId> for i64 {
    fn from(value: TechnologyId) -> Self {
        value.0
    }
}
