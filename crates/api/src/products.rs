//! Product endpoint implementation.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Method;

use backoffice_core::constants::PRODUCTS_ENDPOINT;
use backoffice_core::errors::{Error, Result};
use backoffice_core::products::{Product, ProductDraft, ProductPage, ProductsApiTrait};
use backoffice_core::uploads::ImageUpload;

use crate::client::ApiClient;

pub struct ProductsApi {
    client: Arc<ApiClient>,
}

impl ProductsApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        ProductsApi { client }
    }
}

/// Multipart body with the draft as a JSON part plus any number of images,
/// all under the repeated `images` part name.
fn product_form(draft: &ProductDraft, images: &[ImageUpload]) -> Result<Form> {
    let json = Part::text(serde_json::to_string(draft)?)
        .mime_str("application/json")
        .map_err(|e| Error::Unexpected(format!("invalid part content type: {}", e)))?;

    let mut form = Form::new().part("product", json);
    for image in images {
        form = form.part("images", ApiClient::image_part(image)?);
    }
    Ok(form)
}

#[async_trait]
impl ProductsApiTrait for ProductsApi {
    async fn list(&self, page: u32, size: u32) -> Result<ProductPage> {
        let path = format!("{}?page={}&size={}", PRODUCTS_ENDPOINT, page, size);
        self.client.get_json(&path).await
    }

    async fn get(&self, id: i64) -> Result<Product> {
        self.client
            .get_json(&format!("{}/{}", PRODUCTS_ENDPOINT, id))
            .await
    }

    async fn create(&self, draft: &ProductDraft, images: &[ImageUpload]) -> Result<Product> {
        self.client
            .send_multipart(Method::POST, PRODUCTS_ENDPOINT, || {
                product_form(draft, images)
            })
            .await
    }

    async fn update(
        &self,
        id: i64,
        draft: &ProductDraft,
        images: &[ImageUpload],
    ) -> Result<Product> {
        let path = format!("{}/{}", PRODUCTS_ENDPOINT, id);
        self.client
            .send_multipart(Method::PUT, &path, || product_form(draft, images))
            .await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.client
            .delete(&format!("{}/{}", PRODUCTS_ENDPOINT, id))
            .await
    }
}
