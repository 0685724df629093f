// src/application/commands/projects/update.rs
use super::ProjectCommandService;
use crate::{
    application::{
        dto::ProjectDto,
        error::{ApplicationError, ApplicationResult},
        ports::storage::ImagePayload,
    },
    domain::project::{
        ProjectDescription, ProjectId, ProjectTitle, ProjectUpdate, TechnologySyncPlan,
    },
};

pub struct UpdateProjectCommand {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub type_id: Option<i64>,
    /// `None` leaves the association set untouched; `Some(vec![])` clears it.
    pub technologies: Option<Vec<i64>>,
    pub cover_image: Option<ImagePayload>,
}

impl ProjectCommandService {
    pub async fn update_project(
        &self,
        command: UpdateProjectCommand,
    ) -> ApplicationResult<ProjectDto> {
        let id = ProjectId::new(command.id)?;
        let project = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("project not found"))?;

        let title = ProjectTitle::new(command.title)?;
        let description = ProjectDescription::new(command.description)?;
        let type_id = self.resolve_project_type(command.type_id).await?;

        let target = match &command.technologies {
            Some(ids) => Some(self.resolve_technologies(ids).await?),
            None => None,
        };

        // Excluding the project itself keeps an unchanged title on its
        // current slug instead of inventing a `-1` variant.
        let slug = self
            .slug_service
            .generate_unique_slug(&title, Some(id))
            .await?;

        let cover_image = match &command.cover_image {
            Some(payload) => Some(self.replace_cover_image(&project.cover_image, payload).await?),
            None => None,
        };

        let updated = self
            .write_repo
            .update(ProjectUpdate {
                id,
                title,
                slug: slug.clone(),
                description,
                cover_image,
                type_id,
                updated_at: self.clock.now(),
            })
            .await
            .map_err(|err| super::service::slug_taken(err, &slug))?;

        let technologies = match target {
            Some(target) => {
                let current = self.read_repo.technology_ids(id).await?;
                let plan = TechnologySyncPlan::between(&current, &target);
                if !plan.is_noop() {
                    self.write_repo.sync_technologies(id, &plan).await?;
                }
                target
            }
            None => self.read_repo.technology_ids(id).await?,
        };

        Ok(ProjectDto::from_parts(updated, technologies))
    }

    /// Drops the previous cover file before storing the new one. A failed
    /// delete only orphans a file, so it is logged and the upload proceeds;
    /// a failed store aborts the update before the row is touched.
    async fn replace_cover_image(
        &self,
        old_path: &Option<String>,
        payload: &ImagePayload,
    ) -> ApplicationResult<String> {
        if let Some(old) = old_path {
            if let Err(err) = self.image_store.delete(old).await {
                tracing::warn!(path = %old, error = %err, "failed to delete previous cover image");
            }
        }
        self.store_cover_image(payload).await
    }
}
