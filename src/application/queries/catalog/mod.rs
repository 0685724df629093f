// src/application/queries/catalog/mod.rs
mod list;
mod service;

pub use service::CatalogQueryService;
