pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::Technology;
pub use repository::TechnologyRepository;
pub use value_objects::TechnologyId;
