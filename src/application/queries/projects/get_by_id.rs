use super::ProjectQueryService;
use crate::{
    application::{
        dto::ProjectDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::project::ProjectId,
};

pub struct GetProjectByIdQuery {
    pub id: i64,
}

impl ProjectQueryService {
    pub async fn get_project_by_id(
        &self,
        query: GetProjectByIdQuery,
    ) -> ApplicationResult<ProjectDto> {
        let id = ProjectId::new(query.id)?;
        let project = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("project not found"))?;
        let technologies = self.read_repo.technology_ids(id).await?;
        Ok(ProjectDto::from_parts(project, technologies))
    }
}
