// src/domain/project/services.rs
use std::sync::Arc;

use chrono::Utc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::DomainResult;
use crate::domain::project::repository::ProjectReadRepository;
use crate::domain::project::value_objects::{ProjectId, ProjectSlug, ProjectTitle};

/// Domain service responsible for producing unique slugs for projects.
///
/// The repository probe is a fast path; the UNIQUE constraint on the slug
/// column remains the final authority under concurrent creates.
pub struct ProjectSlugService {
    read_repo: Arc<dyn ProjectReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl ProjectSlugService {
    pub fn new(
        read_repo: Arc<dyn ProjectReadRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    pub async fn generate_unique_slug(
        &self,
        title: &ProjectTitle,
        ignore_id: Option<ProjectId>,
    ) -> DomainResult<ProjectSlug> {
        let base = self.generator.slugify(title.as_str());
        // Titles made of punctuation only slugify to nothing; fall back to a
        // timestamped placeholder rather than an empty slug.
        let base_slug = if base.is_empty() {
            format!("project-{}", Utc::now().timestamp())
        } else {
            base
        };

        let mut candidate = base_slug.clone();
        let mut counter = 1u64;

        loop {
            let slug = ProjectSlug::new(candidate.clone())?;
            match self.read_repo.find_by_slug(&slug).await? {
                Some(existing) if ignore_id.map(|id| id == existing.id).unwrap_or(false) => {
                    return Ok(slug);
                }
                Some(_) => {
                    candidate = format!("{}-{}", base_slug, counter);
                    counter += 1;
                }
                None => return Ok(slug),
            }
        }
    }
}
