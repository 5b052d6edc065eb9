//! Configuration module

mod catalog;

pub use catalog::CatalogConfig;
