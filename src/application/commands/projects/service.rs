// src/application/commands/projects/service.rs
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::{
            notifier::LeadNotifier,
            storage::{ImagePayload, ImageStore},
            time::Clock,
        },
    },
    domain::{
        errors::DomainError,
        lead::LeadRepository,
        project::{
            ProjectReadRepository, ProjectSlug, ProjectWriteRepository,
            services::ProjectSlugService,
        },
        project_type::{ProjectTypeId, ProjectTypeRepository},
        technology::{TechnologyId, TechnologyRepository},
    },
};

/// Directory under the media root where cover images land.
pub(super) const COVER_IMAGE_NAMESPACE: &str = "project_images";

pub struct ProjectCommandService {
    pub(super) write_repo: Arc<dyn ProjectWriteRepository>,
    pub(super) read_repo: Arc<dyn ProjectReadRepository>,
    pub(super) technology_repo: Arc<dyn TechnologyRepository>,
    pub(super) project_type_repo: Arc<dyn ProjectTypeRepository>,
    pub(super) lead_repo: Arc<dyn LeadRepository>,
    pub(super) slug_service: Arc<ProjectSlugService>,
    pub(super) image_store: Arc<dyn ImageStore>,
    pub(super) notifier: Arc<dyn LeadNotifier>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ProjectCommandService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        write_repo: Arc<dyn ProjectWriteRepository>,
        read_repo: Arc<dyn ProjectReadRepository>,
        technology_repo: Arc<dyn TechnologyRepository>,
        project_type_repo: Arc<dyn ProjectTypeRepository>,
        lead_repo: Arc<dyn LeadRepository>,
        slug_service: Arc<ProjectSlugService>,
        image_store: Arc<dyn ImageStore>,
        notifier: Arc<dyn LeadNotifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            technology_repo,
            project_type_repo,
            lead_repo,
            slug_service,
            image_store,
            notifier,
            clock,
        }
    }

    /// Maps raw technology ids to the domain type and rejects any id that
    /// does not reference an existing technology. The whole write aborts on
    /// the first dangling reference; no partial sync is ever applied.
    pub(super) async fn resolve_technologies(
        &self,
        ids: &[i64],
    ) -> ApplicationResult<BTreeSet<TechnologyId>> {
        let target = ids
            .iter()
            .map(|id| TechnologyId::new(*id))
            .collect::<Result<BTreeSet<_>, _>>()?;

        let existing = self.technology_repo.filter_existing(&target).await?;
        let missing: Vec<String> = target
            .difference(&existing)
            .map(|id| i64::from(*id).to_string())
            .collect();

        if missing.is_empty() {
            Ok(target)
        } else {
            Err(ApplicationError::reference(format!(
                "unknown technology id(s): {}",
                missing.join(", ")
            )))
        }
    }

    pub(super) async fn resolve_project_type(
        &self,
        id: Option<i64>,
    ) -> ApplicationResult<Option<ProjectTypeId>> {
        let Some(raw) = id else { return Ok(None) };
        let type_id = ProjectTypeId::new(raw)?;
        if self.project_type_repo.exists(type_id).await? {
            Ok(Some(type_id))
        } else {
            Err(ApplicationError::reference(format!(
                "unknown project type id: {raw}"
            )))
        }
    }

    pub(super) async fn store_cover_image(
        &self,
        payload: &ImagePayload,
    ) -> ApplicationResult<String> {
        let path = self
            .image_store
            .put(COVER_IMAGE_NAMESPACE, payload)
            .await?;
        Ok(path)
    }
}

/// A writer that races past the slug probe loses to the UNIQUE index; name
/// the slug in the conflict instead of leaking the raw database message.
pub(super) fn slug_taken(err: DomainError, slug: &ProjectSlug) -> ApplicationError {
    match err {
        DomainError::Conflict(_) => ApplicationError::conflict(format!(
            "slug '{}' is already taken",
            slug.as_str()
        )),
        other => other.into(),
    }
}
