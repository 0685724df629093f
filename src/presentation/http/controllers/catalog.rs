// src/presentation/http/controllers/catalog.rs
use crate::application::dto::{ProjectTypeDto, TechnologyDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/v1/admin/technologies",
    responses(
        (status = 200, description = "Technology tags available for association.", body = [TechnologyDto])
    ),
    tag = "Catalog"
)]
pub async fn list_technologies(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<TechnologyDto>>> {
    state
        .services
        .catalog_queries
        .list_technologies()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/types",
    responses(
        (status = 200, description = "Project types available for selection.", body = [ProjectTypeDto])
    ),
    tag = "Catalog"
)]
pub async fn list_types(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ProjectTypeDto>>> {
    state
        .services
        .catalog_queries
        .list_project_types()
        .await
        .into_http()
        .map(Json)
}
