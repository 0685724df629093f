// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::projects::ProjectCommandService,
        ports::{notifier::LeadNotifier, storage::ImageStore, time::Clock, util::SlugGenerator},
        queries::{catalog::CatalogQueryService, projects::ProjectQueryService},
    },
    domain::{
        lead::LeadRepository,
        project::{
            ProjectReadRepository, ProjectWriteRepository, services::ProjectSlugService,
        },
        project_type::ProjectTypeRepository,
        technology::TechnologyRepository,
    },
};

pub struct ApplicationServices {
    pub project_commands: Arc<ProjectCommandService>,
    pub project_queries: Arc<ProjectQueryService>,
    pub catalog_queries: Arc<CatalogQueryService>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        project_write_repo: Arc<dyn ProjectWriteRepository>,
        project_read_repo: Arc<dyn ProjectReadRepository>,
        technology_repo: Arc<dyn TechnologyRepository>,
        project_type_repo: Arc<dyn ProjectTypeRepository>,
        lead_repo: Arc<dyn LeadRepository>,
        image_store: Arc<dyn ImageStore>,
        notifier: Arc<dyn LeadNotifier>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let slug_service = Arc::new(ProjectSlugService::new(
            Arc::clone(&project_read_repo),
            Arc::clone(&slugger),
        ));

        let project_commands = Arc::new(ProjectCommandService::new(
            Arc::clone(&project_write_repo),
            Arc::clone(&project_read_repo),
            Arc::clone(&technology_repo),
            Arc::clone(&project_type_repo),
            Arc::clone(&lead_repo),
            slug_service,
            Arc::clone(&image_store),
            Arc::clone(&notifier),
            Arc::clone(&clock),
        ));

        let project_queries = Arc::new(ProjectQueryService::new(Arc::clone(&project_read_repo)));
        let catalog_queries = Arc::new(CatalogQueryService::new(
            Arc::clone(&technology_repo),
            Arc::clone(&project_type_repo),
        ));

        Self {
            project_commands,
            project_queries,
            catalog_queries,
        }
    }
}
