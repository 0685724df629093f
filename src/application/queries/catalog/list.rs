use super::CatalogQueryService;
use crate::application::{
    dto::{ProjectTypeDto, TechnologyDto},
    error::ApplicationResult,
};

impl CatalogQueryService {
    pub async fn list_technologies(&self) -> ApplicationResult<Vec<TechnologyDto>> {
        let rows = self.technology_repo.list().await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn list_project_types(&self) -> ApplicationResult<Vec<ProjectTypeDto>> {
        let rows = self.project_type_repo.list().await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
