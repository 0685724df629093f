use crate::domain::errors::DomainResult;
use crate::domain::project_type::entity::ProjectType;
use crate::domain::project_type::value_objects::ProjectTypeId;
use async_trait::async_trait;

#[async_trait]
pub trait ProjectTypeRepository: Send + Sync {
    async fn list(&self) -> DomainResult<Vec<ProjectType>>;
    async fn exists(&self, id: ProjectTypeId) -> DomainResult<bool>;
}
