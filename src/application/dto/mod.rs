pub mod catalog;
pub mod leads;
pub mod projects;

pub use catalog::{ProjectTypeDto, TechnologyDto};
pub use leads::LeadDto;
pub use projects::ProjectDto;
