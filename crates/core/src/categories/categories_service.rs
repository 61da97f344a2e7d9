//! Category service implementation.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::errors::Result;
use crate::uploads::ImageUpload;

use super::{
    build_tree, eligible_parents, slugify_custom_id, CategoriesApiTrait, Category, CategoryDraft,
    CategoryNode, CategoryServiceTrait,
};

pub struct CategoryService {
    api: Arc<dyn CategoriesApiTrait>,
}

impl CategoryService {
    pub fn new(api: Arc<dyn CategoriesApiTrait>) -> Self {
        CategoryService { api }
    }
}

#[async_trait]
impl CategoryServiceTrait for CategoryService {
    async fn get_categories(&self) -> Result<Vec<Category>> {
        self.api.list().await
    }

    async fn get_category_tree(&self) -> Result<Vec<CategoryNode>> {
        let categories = self.api.list().await?;
        Ok(build_tree(&categories))
    }

    async fn get_eligible_parents(&self, target_level: i32) -> Result<Vec<Category>> {
        let categories = self.api.list().await?;
        Ok(eligible_parents(&categories, target_level)
            .into_iter()
            .cloned()
            .collect())
    }

    async fn save_category(
        &self,
        id: Option<i64>,
        mut draft: CategoryDraft,
        icon: Option<ImageUpload>,
    ) -> Result<Category> {
        if draft.custom_id.is_none() {
            draft.custom_id = slugify_custom_id(&draft.name_en);
        }

        // Parent/level consistency is checked against the latest list.
        let known = self.api.list().await?;
        let mut errors = draft.validate(&known);
        if let Some(icon) = icon.as_ref() {
            errors.extend(icon.validate("icon"));
        }
        if !errors.is_empty() {
            return Err(errors.into());
        }

        match id {
            Some(id) => {
                debug!("updating category {}", id);
                self.api.update(id, &draft, icon.as_ref()).await
            }
            None => {
                debug!("creating category '{}'", draft.name_en);
                self.api.create(&draft, icon.as_ref()).await
            }
        }
    }

    async fn delete_category(&self, id: i64) -> Result<()> {
        debug!("deleting category {}", id);
        self.api.delete(id).await
    }
}
