use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::invoices::invoices_model::{Invoice, InvoiceDraft, NewInvoice};

/// Remote invoice endpoints.
#[async_trait]
pub trait InvoicesApiTrait: Send + Sync {
    async fn list(&self) -> Result<Vec<Invoice>>;
    async fn get(&self, id: i64) -> Result<Invoice>;
    async fn list_by_supplier(&self, supplier_id: i64) -> Result<Vec<Invoice>>;
    async fn create(&self, invoice: &NewInvoice) -> Result<Invoice>;
    async fn update(&self, id: i64, invoice: &NewInvoice) -> Result<Invoice>;
    async fn delete(&self, id: i64) -> Result<()>;
}

/// Invoice ledger workflow offered to callers.
#[async_trait]
pub trait InvoiceServiceTrait: Send + Sync {
    async fn get_invoices(&self) -> Result<Vec<Invoice>>;
    async fn get_invoice(&self, id: i64) -> Result<Invoice>;
    async fn get_supplier_invoices(&self, supplier_id: i64) -> Result<Vec<Invoice>>;
    async fn save_invoice(&self, id: Option<i64>, draft: InvoiceDraft) -> Result<Invoice>;
    async fn delete_invoice(&self, id: i64) -> Result<()>;
    /// Suggested unit price when a product is added to a line.
    async fn default_unit_price(&self, product_id: i64) -> Result<Decimal>;
}
