// src/domain/lead/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::project::Project;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LeadId(pub i64);

impl LeadId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("lead id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<LeadId> for i64 {
    fn from(value: LeadId) -> Self {
        value.0
    }
}

/// Sales/contact record generated once per project creation. Independent
/// lifecycle: never updated or deleted by this service.
#[derive(Debug, Clone)]
pub struct Lead {
    pub id: LeadId,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewLead {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl NewLead {
    pub fn from_project(project: &Project, now: DateTime<Utc>) -> Self {
        Self {
            title: project.title.as_str().to_owned(),
            slug: project.slug.as_str().to_owned(),
            description: project.description.as_str().to_owned(),
            created_at: now,
        }
    }
}
