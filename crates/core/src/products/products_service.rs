//! Product catalog service implementation.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::constants::DEFAULT_PAGE_SIZE;
use crate::errors::Result;
use crate::uploads::ImageUpload;

use super::{Product, ProductDraft, ProductPage, ProductServiceTrait, ProductsApiTrait};

pub struct ProductService {
    api: Arc<dyn ProductsApiTrait>,
}

impl ProductService {
    pub fn new(api: Arc<dyn ProductsApiTrait>) -> Self {
        ProductService { api }
    }
}

#[async_trait]
impl ProductServiceTrait for ProductService {
    async fn get_page(&self, page: u32) -> Result<ProductPage> {
        self.api.list(page, DEFAULT_PAGE_SIZE).await
    }

    async fn get_product(&self, id: i64) -> Result<Product> {
        self.api.get(id).await
    }

    async fn save_product(
        &self,
        id: Option<i64>,
        draft: ProductDraft,
        images: Vec<ImageUpload>,
    ) -> Result<Product> {
        let mut errors = draft.validate();
        for image in &images {
            errors.extend(image.validate("images"));
        }
        if !errors.is_empty() {
            return Err(errors.into());
        }

        match id {
            Some(id) => {
                debug!("updating product {}", id);
                self.api.update(id, &draft, &images).await
            }
            None => {
                debug!("creating product '{}'", draft.title);
                self.api.create(&draft, &images).await
            }
        }
    }

    async fn delete_product(&self, id: i64) -> Result<()> {
        debug!("deleting product {}", id);
        self.api.delete(id).await
    }
}
