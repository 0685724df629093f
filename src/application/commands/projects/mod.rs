// src/application/commands/projects/mod.rs
mod create;
mod delete;
mod service;
#[cfg(test)]
pub(crate) mod testing;
mod update;

pub use create::CreateProjectCommand;
pub use delete::DeleteProjectCommand;
pub use service::ProjectCommandService;
pub use update::UpdateProjectCommand;
