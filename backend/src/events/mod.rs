pub mod controller;
pub mod repository;

pub use repository::{CatalogError, EventCatalog, InMemoryCatalog};
