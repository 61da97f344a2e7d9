//! Supplier endpoint implementation.

use std::sync::Arc;

use async_trait::async_trait;

use backoffice_core::constants::SUPPLIERS_ENDPOINT;
use backoffice_core::errors::Result;
use backoffice_core::suppliers::{Supplier, SupplierDraft, SuppliersApiTrait};

use crate::client::ApiClient;

pub struct SuppliersApi {
    client: Arc<ApiClient>,
}

impl SuppliersApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        SuppliersApi { client }
    }
}

#[async_trait]
impl SuppliersApiTrait for SuppliersApi {
    async fn list(&self) -> Result<Vec<Supplier>> {
        self.client.get_json(SUPPLIERS_ENDPOINT).await
    }

    async fn get(&self, id: i64) -> Result<Supplier> {
        self.client
            .get_json(&format!("{}/{}", SUPPLIERS_ENDPOINT, id))
            .await
    }

    async fn create(&self, draft: &SupplierDraft) -> Result<Supplier> {
        self.client.post_json(SUPPLIERS_ENDPOINT, draft).await
    }

    async fn update(&self, id: i64, draft: &SupplierDraft) -> Result<Supplier> {
        self.client
            .put_json(&format!("{}/{}", SUPPLIERS_ENDPOINT, id), draft)
            .await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.client
            .delete(&format!("{}/{}", SUPPLIERS_ENDPOINT, id))
            .await
    }
}
