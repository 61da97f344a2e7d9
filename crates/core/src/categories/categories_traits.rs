use async_trait::async_trait;

use crate::errors::Result;
use crate::uploads::ImageUpload;

use super::{Category, CategoryDraft, CategoryNode};

/// Remote category endpoints. Create and update are multipart calls carrying
/// the draft as a JSON part plus an optional icon attachment.
#[async_trait]
pub trait CategoriesApiTrait: Send + Sync {
    async fn list(&self) -> Result<Vec<Category>>;
    async fn create(&self, draft: &CategoryDraft, icon: Option<&ImageUpload>) -> Result<Category>;
    async fn update(
        &self,
        id: i64,
        draft: &CategoryDraft,
        icon: Option<&ImageUpload>,
    ) -> Result<Category>;
    async fn delete(&self, id: i64) -> Result<()>;
}

/// Category workflow operations.
#[async_trait]
pub trait CategoryServiceTrait: Send + Sync {
    async fn get_categories(&self) -> Result<Vec<Category>>;
    async fn get_category_tree(&self) -> Result<Vec<CategoryNode>>;
    async fn get_eligible_parents(&self, target_level: i32) -> Result<Vec<Category>>;

    /// Validates and submits the draft; `id` selects update over create.
    async fn save_category(
        &self,
        id: Option<i64>,
        draft: CategoryDraft,
        icon: Option<ImageUpload>,
    ) -> Result<Category>;

    async fn delete_category(&self, id: i64) -> Result<()>;
}
