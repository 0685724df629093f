pub mod catalog;
pub mod projects;
