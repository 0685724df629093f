pub mod associations;
pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use associations::TechnologySyncPlan;
pub use entity::{NewProject, Project, ProjectUpdate};
pub use repository::{ProjectReadRepository, ProjectWriteRepository};
pub use value_objects::{ProjectDescription, ProjectId, ProjectSlug, ProjectTitle};
