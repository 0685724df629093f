// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{catalog, projects},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::get,
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allow_origin(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route(
            "/api/v1/admin/projects",
            get(projects::list_projects).post(projects::create_project),
        )
        .route(
            "/api/v1/admin/projects/{id}",
            get(projects::get_project)
                .put(projects::update_project)
                .delete(projects::delete_project),
        )
        .route("/api/v1/admin/technologies", get(catalog::list_technologies))
        .route("/api/v1/admin/types", get(catalog::list_types))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

fn allow_origin(origins: &[String]) -> AllowOrigin {
    match origin_header_values(origins) {
        Some(values) => AllowOrigin::list(values),
        None => AllowOrigin::any(),
    }
}

/// `None` stands for the `"*"` wildcard. Entries that are not valid header
/// values are dropped rather than poisoning the whole list.
fn origin_header_values(origins: &[String]) -> Option<Vec<HeaderValue>> {
    if origins.iter().any(|origin| origin == "*") {
        return None;
    }
    Some(
        origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect(),
    )
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
