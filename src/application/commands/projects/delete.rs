// src/application/commands/projects/delete.rs
use super::ProjectCommandService;
use crate::{
    application::{
        dto::ProjectDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::project::ProjectId,
};

pub struct DeleteProjectCommand {
    pub id: i64,
}

impl ProjectCommandService {
    /// Removes the project row. Association rows go with it through the
    /// database's ON DELETE CASCADE; the stored cover file is left in place,
    /// matching the admin's observed behavior.
    pub async fn delete_project(
        &self,
        command: DeleteProjectCommand,
    ) -> ApplicationResult<ProjectDto> {
        let id = ProjectId::new(command.id)?;
        let project = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("project not found"))?;
        let technologies = self.read_repo.technology_ids(id).await?;

        self.write_repo.delete(id).await?;
        Ok(ProjectDto::from_parts(project, technologies))
    }
}

#[cfg(test)]
mod tests {
    use super::super::CreateProjectCommand;
    use super::super::testing::TestHarness;
    use super::*;

    #[tokio::test]
    async fn delete_removes_project_and_associations() {
        let harness = TestHarness::with_technologies(&[1, 2]);
        let created = harness
            .service()
            .create_project(CreateProjectCommand {
                title: "Doomed".into(),
                description: "to be removed".into(),
                type_id: None,
                technologies: Some(vec![1, 2]),
                cover_image: None,
            })
            .await
            .unwrap();

        let deleted = harness
            .service()
            .delete_project(DeleteProjectCommand { id: created.id })
            .await
            .unwrap();

        assert_eq!(deleted.id, created.id);
        assert_eq!(harness.project_count(), 0);
        assert!(harness.stored_technology_ids(created.id).is_empty());
    }

    #[tokio::test]
    async fn deleted_project_is_gone_for_good() {
        let harness = TestHarness::new();
        let created = harness
            .service()
            .create_project(CreateProjectCommand {
                title: "Doomed".into(),
                description: "to be removed".into(),
                type_id: None,
                technologies: None,
                cover_image: None,
            })
            .await
            .unwrap();

        harness
            .service()
            .delete_project(DeleteProjectCommand { id: created.id })
            .await
            .unwrap();

        let err = harness
            .service()
            .delete_project(DeleteProjectCommand { id: created.id })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound(_)));
    }
}
