// src/presentation/http/controllers/projects.rs
use crate::application::{
    commands::projects::{CreateProjectCommand, DeleteProjectCommand, UpdateProjectCommand},
    dto::ProjectDto,
    error::ApplicationError,
    ports::storage::ImagePayload,
    queries::projects::GetProjectByIdQuery,
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Cover image upload, transported as base64 inside the JSON body.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CoverImageUpload {
    pub file_name: String,
    /// Base64-encoded file content.
    pub data: String,
}

impl CoverImageUpload {
    fn decode(self) -> Result<ImagePayload, HttpError> {
        let bytes = BASE64
            .decode(self.data.as_bytes())
            .map_err(|_| {
                HttpError::from_error(ApplicationError::validation(
                    "cover_image.data is not valid base64",
                ))
            })?;
        Ok(ImagePayload {
            file_name: self.file_name,
            bytes: bytes.into(),
        })
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProjectRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub type_id: Option<i64>,
    /// Absent field: no tags. Empty list: explicitly none.
    #[serde(default)]
    pub technologies: Option<Vec<i64>>,
    #[serde(default)]
    pub cover_image: Option<CoverImageUpload>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProjectRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub type_id: Option<i64>,
    /// Absent field: keep current tags. Empty list: remove all.
    #[serde(default)]
    pub technologies: Option<Vec<i64>>,
    #[serde(default)]
    pub cover_image: Option<CoverImageUpload>,
}

/// Mutation responses carry the admin flash message alongside the resource.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectMessageResponse {
    pub message: String,
    pub project: ProjectDto,
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/projects",
    responses(
        (status = 200, description = "All projects, newest first.", body = [ProjectDto])
    ),
    tag = "Projects"
)]
pub async fn list_projects(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ProjectDto>>> {
    state
        .services
        .project_queries
        .list_projects()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/projects/{id}",
    params(("id" = i64, Path, description = "Project identifier")),
    responses(
        (status = 200, description = "The requested project.", body = ProjectDto),
        (status = 404, description = "No project with this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Projects"
)]
pub async fn get_project(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ProjectDto>> {
    state
        .services
        .project_queries
        .get_project_by_id(GetProjectByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/projects",
    request_body = CreateProjectRequest,
    responses(
        (status = 200, description = "Project created; a lead was captured.", body = ProjectMessageResponse),
        (status = 400, description = "Malformed input.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug taken by a concurrent write.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Unknown technology or type reference.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Projects"
)]
pub async fn create_project(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateProjectRequest>,
) -> HttpResult<Json<ProjectMessageResponse>> {
    let cover_image = payload.cover_image.map(CoverImageUpload::decode).transpose()?;
    let command = CreateProjectCommand {
        title: payload.title,
        description: payload.description,
        type_id: payload.type_id,
        technologies: payload.technologies,
        cover_image,
    };

    let project = state
        .services
        .project_commands
        .create_project(command)
        .await
        .into_http()?;

    Ok(Json(ProjectMessageResponse {
        message: "Project created successfully".into(),
        project,
    }))
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/projects/{id}",
    params(("id" = i64, Path, description = "Project identifier")),
    request_body = UpdateProjectRequest,
    responses(
        (status = 200, description = "Project updated.", body = ProjectMessageResponse),
        (status = 404, description = "No project with this id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug taken by a concurrent write.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Unknown technology or type reference.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Projects"
)]
pub async fn update_project(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateProjectRequest>,
) -> HttpResult<Json<ProjectMessageResponse>> {
    let cover_image = payload.cover_image.map(CoverImageUpload::decode).transpose()?;
    let command = UpdateProjectCommand {
        id,
        title: payload.title,
        description: payload.description,
        type_id: payload.type_id,
        technologies: payload.technologies,
        cover_image,
    };

    let project = state
        .services
        .project_commands
        .update_project(command)
        .await
        .into_http()?;

    let message = format!("Project {} was updated successfully", project.title);
    Ok(Json(ProjectMessageResponse { message, project }))
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/projects/{id}",
    params(("id" = i64, Path, description = "Project identifier")),
    responses(
        (status = 200, description = "Project deleted.", body = ProjectMessageResponse),
        (status = 404, description = "No project with this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Projects"
)]
pub async fn delete_project(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ProjectMessageResponse>> {
    let project = state
        .services
        .project_commands
        .delete_project(DeleteProjectCommand { id })
        .await
        .into_http()?;

    let message = format!("Project {} was deleted", project.title);
    Ok(Json(ProjectMessageResponse { message, project }))
}
