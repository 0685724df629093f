// src/application/queries/catalog/service.rs
use std::sync::Arc;

use crate::domain::{project_type::ProjectTypeRepository, technology::TechnologyRepository};

/// Read side for the reference entities backing the admin's create/edit
/// forms: technology tags and project types.
pub struct CatalogQueryService {
    pub(super) technology_repo: Arc<dyn TechnologyRepository>,
    pub(super) project_type_repo: Arc<dyn ProjectTypeRepository>,
}

impl CatalogQueryService {
    pub fn new(
        technology_repo: Arc<dyn TechnologyRepository>,
        project_type_repo: Arc<dyn ProjectTypeRepository>,
    ) -> Self {
        Self {
            technology_repo,
            project_type_repo,
        }
    }
}
