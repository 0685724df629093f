use crate::domain::errors::DomainResult;
use crate::domain::lead::entity::{Lead, NewLead};
use async_trait::async_trait;

#[async_trait]
pub trait LeadRepository: Send + Sync {
    async fn insert(&self, lead: NewLead) -> DomainResult<Lead>;
}
