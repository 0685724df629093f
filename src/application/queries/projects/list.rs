use super::ProjectQueryService;
use crate::application::{dto::ProjectDto, error::ApplicationResult};

impl ProjectQueryService {
    /// Full listing for the admin index, newest first, each project carrying
    /// its associated technology ids.
    pub async fn list_projects(&self) -> ApplicationResult<Vec<ProjectDto>> {
        let projects = self.read_repo.list().await?;

        let mut items = Vec::with_capacity(projects.len());
        for project in projects {
            let technologies = self.read_repo.technology_ids(project.id).await?;
            items.push(ProjectDto::from_parts(project, technologies));
        }
        Ok(items)
    }
}
