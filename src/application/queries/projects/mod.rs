// src/application/queries/projects/mod.rs
mod get_by_id;
mod list;
mod service;

pub use get_by_id::GetProjectByIdQuery;
pub use service::ProjectQueryService;
