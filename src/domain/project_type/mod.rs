pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::ProjectType;
pub use repository::ProjectTypeRepository;
pub use value_objects::ProjectTypeId;
