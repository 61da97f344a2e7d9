use async_trait::async_trait;

use crate::errors::Result;
use crate::products::products_model::{Product, ProductDraft, ProductPage};
use crate::uploads::ImageUpload;

/// Remote product catalog endpoints.
#[async_trait]
pub trait ProductsApiTrait: Send + Sync {
    async fn list(&self, page: u32, size: u32) -> Result<ProductPage>;
    async fn get(&self, id: i64) -> Result<Product>;
    async fn create(&self, draft: &ProductDraft, images: &[ImageUpload]) -> Result<Product>;
    async fn update(
        &self,
        id: i64,
        draft: &ProductDraft,
        images: &[ImageUpload],
    ) -> Result<Product>;
    async fn delete(&self, id: i64) -> Result<()>;
}

/// Product catalog workflow offered to callers.
#[async_trait]
pub trait ProductServiceTrait: Send + Sync {
    async fn get_page(&self, page: u32) -> Result<ProductPage>;
    async fn get_product(&self, id: i64) -> Result<Product>;
    async fn save_product(
        &self,
        id: Option<i64>,
        draft: ProductDraft,
        images: Vec<ImageUpload>,
    ) -> Result<Product>;
    async fn delete_product(&self, id: i64) -> Result<()>;
}
