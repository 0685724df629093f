// src/infrastructure/repositories/mod.rs
mod sqlite_lead;
mod sqlite_project;
mod sqlite_project_type;
mod sqlite_technology;

pub use sqlite_lead::SqliteLeadRepository;
pub use sqlite_project::{SqliteProjectReadRepository, SqliteProjectWriteRepository};
pub use sqlite_project_type::SqliteProjectTypeRepository;
pub use sqlite_technology::SqliteTechnologyRepository;
