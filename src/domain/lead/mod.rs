pub mod entity;
pub mod repository;

pub use entity::{Lead, LeadId, NewLead};
pub use repository::LeadRepository;
