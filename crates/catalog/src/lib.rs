#![forbid(unsafe_code)]

pub mod catalog;

pub use catalog::{CatalogError, QuestionCatalog, StaticCatalog};
