// src/application/ports/notifier.rs
use crate::application::dto::LeadDto;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("notification failed: {0}")]
pub struct NotifierError(pub String);

/// Outbound notification about a freshly captured lead. Fire-and-forget from
/// the write flow's perspective: failures are logged, never propagated.
#[async_trait]
pub trait LeadNotifier: Send + Sync {
    async fn notify_new_lead(&self, lead: &LeadDto) -> Result<(), NotifierError>;
}
