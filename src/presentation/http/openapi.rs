// src/presentation/http/openapi.rs
use axum::Router;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::projects::list_projects,
        crate::presentation::http::controllers::projects::get_project,
        crate::presentation::http::controllers::projects::create_project,
        crate::presentation::http::controllers::projects::update_project,
        crate::presentation::http::controllers::projects::delete_project,
        crate::presentation::http::controllers::catalog::list_technologies,
        crate::presentation::http::controllers::catalog::list_types,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::projects::CreateProjectRequest,
            crate::presentation::http::controllers::projects::UpdateProjectRequest,
            crate::presentation::http::controllers::projects::CoverImageUpload,
            crate::presentation::http::controllers::projects::ProjectMessageResponse,
            crate::application::dto::ProjectDto,
            crate::application::dto::TechnologyDto,
            crate::application::dto::ProjectTypeDto,
            crate::application::dto::LeadDto
        )
    ),
    tags(
        (name = "Projects", description = "Admin project management endpoints"),
        (name = "Catalog", description = "Reference data for the admin forms"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Folio Admin API",
        description = "Headless portfolio admin backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
