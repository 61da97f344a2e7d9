//! Invoice endpoint implementation.

use std::sync::Arc;

use async_trait::async_trait;

use backoffice_core::constants::INVOICES_ENDPOINT;
use backoffice_core::errors::Result;
use backoffice_core::invoices::{Invoice, InvoicesApiTrait, NewInvoice};

use crate::client::ApiClient;

pub struct InvoicesApi {
    client: Arc<ApiClient>,
}

impl InvoicesApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        InvoicesApi { client }
    }
}

#[async_trait]
impl InvoicesApiTrait for InvoicesApi {
    async fn list(&self) -> Result<Vec<Invoice>> {
        self.client.get_json(INVOICES_ENDPOINT).await
    }

    async fn get(&self, id: i64) -> Result<Invoice> {
        self.client
            .get_json(&format!("{}/{}", INVOICES_ENDPOINT, id))
            .await
    }

    async fn list_by_supplier(&self, supplier_id: i64) -> Result<Vec<Invoice>> {
        self.client
            .get_json(&format!("{}/supplier/{}", INVOICES_ENDPOINT, supplier_id))
            .await
    }

    async fn create(&self, invoice: &NewInvoice) -> Result<Invoice> {
        self.client.post_json(INVOICES_ENDPOINT, invoice).await
    }

    async fn update(&self, id: i64, invoice: &NewInvoice) -> Result<Invoice> {
        self.client
            .put_json(&format!("{}/{}", INVOICES_ENDPOINT, id), invoice)
            .await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.client
            .delete(&format!("{}/{}", INVOICES_ENDPOINT, id))
            .await
    }
}
