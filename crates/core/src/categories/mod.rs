//! Categories module - hierarchy building, drafts, and services.

mod categories_model;
mod categories_service;
mod categories_traits;
mod hierarchy;

#[cfg(test)]
mod categories_service_tests;

pub use categories_model::{slugify_custom_id, Category, CategoryDraft, CategoryNode};
pub use categories_service::CategoryService;
pub use categories_traits::{CategoriesApiTrait, CategoryServiceTrait};
pub use hierarchy::{build_tree, eligible_parents};
