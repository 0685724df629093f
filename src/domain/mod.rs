pub mod errors;
pub mod lead;
pub mod project;
pub mod project_type;
pub mod technology;
