use crate::domain::errors::DomainResult;
use crate::domain::project::associations::TechnologySyncPlan;
use crate::domain::project::entity::{NewProject, Project, ProjectUpdate};
use crate::domain::project::value_objects::{ProjectId, ProjectSlug};
use crate::domain::technology::TechnologyId;
use async_trait::async_trait;
use std::collections::BTreeSet;

#[async_trait]
pub trait ProjectWriteRepository: Send + Sync {
    async fn insert(&self, project: NewProject) -> DomainResult<Project>;
    async fn update(&self, update: ProjectUpdate) -> DomainResult<Project>;
    async fn delete(&self, id: ProjectId) -> DomainResult<()>;
    /// Applies the plan in a single transaction; either every row change
    /// lands or none does.
    async fn sync_technologies(
        &self,
        id: ProjectId,
        plan: &TechnologySyncPlan,
    ) -> DomainResult<()>;
}

#[async_trait]
pub trait ProjectReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ProjectId) -> DomainResult<Option<Project>>;
    async fn find_by_slug(&self, slug: &ProjectSlug) -> DomainResult<Option<Project>>;
    async fn list(&self) -> DomainResult<Vec<Project>>;
    async fn technology_ids(&self, id: ProjectId) -> DomainResult<BTreeSet<TechnologyId>>;
}
