//! Category endpoint implementation.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Method;

use backoffice_core::categories::{CategoriesApiTrait, Category, CategoryDraft};
use backoffice_core::constants::CATEGORIES_ENDPOINT;
use backoffice_core::errors::{Error, Result};
use backoffice_core::uploads::ImageUpload;

use crate::client::ApiClient;

pub struct CategoriesApi {
    client: Arc<ApiClient>,
}

impl CategoriesApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        CategoriesApi { client }
    }
}

/// Multipart body with the draft as a JSON part plus an optional icon.
fn category_form(draft: &CategoryDraft, icon: Option<&ImageUpload>) -> Result<Form> {
    let json = Part::text(serde_json::to_string(draft)?)
        .mime_str("application/json")
        .map_err(|e| Error::Unexpected(format!("invalid part content type: {}", e)))?;

    let mut form = Form::new().part("category", json);
    if let Some(icon) = icon {
        form = form.part("icon", ApiClient::image_part(icon)?);
    }
    Ok(form)
}

#[async_trait]
impl CategoriesApiTrait for CategoriesApi {
    async fn list(&self) -> Result<Vec<Category>> {
        self.client.get_json(CATEGORIES_ENDPOINT).await
    }

    async fn create(&self, draft: &CategoryDraft, icon: Option<&ImageUpload>) -> Result<Category> {
        self.client
            .send_multipart(Method::POST, CATEGORIES_ENDPOINT, || {
                category_form(draft, icon)
            })
            .await
    }

    async fn update(
        &self,
        id: i64,
        draft: &CategoryDraft,
        icon: Option<&ImageUpload>,
    ) -> Result<Category> {
        let path = format!("{}/{}", CATEGORIES_ENDPOINT, id);
        self.client
            .send_multipart(Method::PUT, &path, || category_form(draft, icon))
            .await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.client
            .delete(&format!("{}/{}", CATEGORIES_ENDPOINT, id))
            .await
    }
}
