// src/application/commands/projects/create.rs
use super::ProjectCommandService;
use crate::{
    application::{
        dto::{LeadDto, ProjectDto},
        error::ApplicationResult,
        ports::storage::ImagePayload,
    },
    domain::{
        lead::NewLead,
        project::{NewProject, ProjectDescription, ProjectTitle, TechnologySyncPlan},
    },
};
use std::collections::BTreeSet;

pub struct CreateProjectCommand {
    pub title: String,
    pub description: String,
    pub type_id: Option<i64>,
    /// `None` means the field was absent from the form; `Some(vec![])` is an
    /// explicit empty selection.
    pub technologies: Option<Vec<i64>>,
    pub cover_image: Option<ImagePayload>,
}

impl ProjectCommandService {
    pub async fn create_project(
        &self,
        command: CreateProjectCommand,
    ) -> ApplicationResult<ProjectDto> {
        let title = ProjectTitle::new(command.title)?;
        let description = ProjectDescription::new(command.description)?;
        let type_id = self.resolve_project_type(command.type_id).await?;

        let target = match &command.technologies {
            Some(ids) => Some(self.resolve_technologies(ids).await?),
            None => None,
        };

        let slug = self.slug_service.generate_unique_slug(&title, None).await?;

        // Store the upload before touching the database so a storage failure
        // leaves no project row behind.
        let cover_image = match &command.cover_image {
            Some(payload) => Some(self.store_cover_image(payload).await?),
            None => None,
        };

        let now = self.clock.now();
        let created = self
            .write_repo
            .insert(NewProject {
                title,
                slug: slug.clone(),
                description,
                cover_image,
                type_id,
                created_at: now,
                updated_at: now,
            })
            .await
            .map_err(|err| super::service::slug_taken(err, &slug))?;

        let technologies = match target {
            Some(target) => {
                let plan = TechnologySyncPlan::between(&BTreeSet::new(), &target);
                if !plan.is_noop() {
                    self.write_repo.sync_technologies(created.id, &plan).await?;
                }
                target
            }
            None => BTreeSet::new(),
        };

        // Every new project doubles as a sales lead. The notification is
        // fire-and-forget: a dead mail hook must not fail the create.
        let lead = self
            .lead_repo
            .insert(NewLead::from_project(&created, now))
            .await?;
        let lead_dto = LeadDto::from(lead);
        if let Err(err) = self.notifier.notify_new_lead(&lead_dto).await {
            tracing::warn!(lead_id = lead_dto.id, error = %err, "lead notification failed");
        }

        Ok(ProjectDto::from_parts(created, technologies))
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{TestHarness, payload};
    use super::*;
    use crate::application::error::ApplicationError;

    #[tokio::test]
    async fn creates_project_with_generated_slug() {
        let harness = TestHarness::new();
        let dto = harness
            .service()
            .create_project(CreateProjectCommand {
                title: "My New Project!".into(),
                description: "a portfolio piece".into(),
                type_id: None,
                technologies: None,
                cover_image: None,
            })
            .await
            .unwrap();

        assert_eq!(dto.slug, "my-new-project");
        assert!(dto.technologies.is_empty());
    }

    #[tokio::test]
    async fn same_title_twice_disambiguates_slug() {
        let harness = TestHarness::new();
        let service = harness.service();

        let first = service
            .create_project(CreateProjectCommand {
                title: "My New Project!".into(),
                description: "first".into(),
                type_id: None,
                technologies: None,
                cover_image: None,
            })
            .await
            .unwrap();
        let second = service
            .create_project(CreateProjectCommand {
                title: "My New Project!".into(),
                description: "second".into(),
                type_id: None,
                technologies: None,
                cover_image: None,
            })
            .await
            .unwrap();

        assert_eq!(first.slug, "my-new-project");
        assert_eq!(second.slug, "my-new-project-1");
    }

    #[tokio::test]
    async fn attaches_submitted_technologies() {
        let harness = TestHarness::with_technologies(&[1, 2, 3]);
        let dto = harness
            .service()
            .create_project(CreateProjectCommand {
                title: "Tagged".into(),
                description: "with tags".into(),
                type_id: None,
                technologies: Some(vec![1, 2, 3]),
                cover_image: None,
            })
            .await
            .unwrap();

        assert_eq!(dto.technologies, vec![1, 2, 3]);
        assert_eq!(harness.stored_technology_ids(dto.id), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn unknown_technology_aborts_the_write() {
        let harness = TestHarness::with_technologies(&[1, 2]);
        let err = harness
            .service()
            .create_project(CreateProjectCommand {
                title: "Broken tags".into(),
                description: "dangling".into(),
                type_id: None,
                technologies: Some(vec![1, 99]),
                cover_image: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::Reference(_)));
        assert_eq!(harness.project_count(), 0);
    }

    #[tokio::test]
    async fn unknown_project_type_aborts_the_write() {
        let harness = TestHarness::new();
        let err = harness
            .service()
            .create_project(CreateProjectCommand {
                title: "Typed".into(),
                description: "bad type".into(),
                type_id: Some(42),
                technologies: None,
                cover_image: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::Reference(_)));
        assert_eq!(harness.project_count(), 0);
    }

    #[tokio::test]
    async fn storage_failure_leaves_no_project_behind() {
        let harness = TestHarness::with_failing_storage();
        let err = harness
            .service()
            .create_project(CreateProjectCommand {
                title: "With image".into(),
                description: "upload".into(),
                type_id: None,
                technologies: None,
                cover_image: Some(payload("cover.png")),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::Storage(_)));
        assert_eq!(harness.project_count(), 0);
        assert_eq!(harness.lead_count(), 0);
    }

    #[tokio::test]
    async fn stored_image_path_lands_on_the_project() {
        let harness = TestHarness::new();
        let dto = harness
            .service()
            .create_project(CreateProjectCommand {
                title: "With image".into(),
                description: "upload".into(),
                type_id: None,
                technologies: None,
                cover_image: Some(payload("cover.png")),
            })
            .await
            .unwrap();

        let path = dto.cover_image.expect("cover image path");
        assert!(path.starts_with("project_images/"));
    }

    #[tokio::test]
    async fn every_create_captures_a_lead() {
        let harness = TestHarness::new();
        let dto = harness
            .service()
            .create_project(CreateProjectCommand {
                title: "Lead source".into(),
                description: "copied into the lead".into(),
                type_id: None,
                technologies: None,
                cover_image: None,
            })
            .await
            .unwrap();

        let leads = harness.leads();
        assert_eq!(leads.len(), 1);
        assert_eq!(leads[0].title, dto.title);
        assert_eq!(leads[0].slug, dto.slug);
        assert_eq!(leads[0].description, dto.description);
        assert_eq!(harness.notified_lead_slugs(), vec![dto.slug]);
    }

    #[tokio::test]
    async fn losing_the_slug_race_surfaces_a_conflict() {
        let harness = TestHarness::with_racing_slug_writer();
        let err = harness
            .service()
            .create_project(CreateProjectCommand {
                title: "Contested".into(),
                description: "two writers, one slug".into(),
                type_id: None,
                technologies: None,
                cover_image: None,
            })
            .await
            .unwrap_err();

        match err {
            ApplicationError::Conflict(msg) => assert!(msg.contains("contested")),
            other => panic!("expected a conflict, got {other:?}"),
        }
        assert_eq!(harness.project_count(), 0);
        assert_eq!(harness.lead_count(), 0);
    }

    #[tokio::test]
    async fn failing_notifier_does_not_fail_the_create() {
        let harness = TestHarness::with_failing_notifier();
        let dto = harness
            .service()
            .create_project(CreateProjectCommand {
                title: "Quiet".into(),
                description: "mail is down".into(),
                type_id: None,
                technologies: None,
                cover_image: None,
            })
            .await
            .unwrap();

        assert_eq!(dto.slug, "quiet");
        assert_eq!(harness.lead_count(), 1);
    }
}
