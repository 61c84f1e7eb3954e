//! Data services module

pub mod catalog;

pub use catalog::CatalogService;
