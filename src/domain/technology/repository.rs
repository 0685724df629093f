use crate::domain::errors::DomainResult;
use crate::domain::technology::entity::Technology;
use crate::domain::technology::value_objects::TechnologyId;
use async_trait::async_trait;
use std::collections::BTreeSet;

#[async_trait]
pub trait TechnologyRepository: Send + Sync {
    async fn list(&self) -> DomainResult<Vec<Technology>>;
    /// Returns the subset of `ids` that actually exist; callers use the
    /// difference to reject dangling association targets.
    async fn filter_existing(
        &self,
        ids: &BTreeSet<TechnologyId>,
    ) -> DomainResult<BTreeSet<TechnologyId>>;
}
