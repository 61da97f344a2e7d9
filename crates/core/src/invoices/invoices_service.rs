//! Invoice ledger service implementation.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;

use crate::errors::{Error, Result};
use crate::products::ProductsApiTrait;

use super::{Invoice, InvoiceDraft, InvoiceServiceTrait, InvoicesApiTrait};

pub struct InvoiceService {
    invoices: Arc<dyn InvoicesApiTrait>,
    products: Arc<dyn ProductsApiTrait>,
}

impl InvoiceService {
    pub fn new(invoices: Arc<dyn InvoicesApiTrait>, products: Arc<dyn ProductsApiTrait>) -> Self {
        InvoiceService { invoices, products }
    }
}

#[async_trait]
impl InvoiceServiceTrait for InvoiceService {
    async fn get_invoices(&self) -> Result<Vec<Invoice>> {
        self.invoices.list().await
    }

    async fn get_invoice(&self, id: i64) -> Result<Invoice> {
        self.invoices.get(id).await
    }

    async fn get_supplier_invoices(&self, supplier_id: i64) -> Result<Vec<Invoice>> {
        self.invoices.list_by_supplier(supplier_id).await
    }

    async fn save_invoice(&self, id: Option<i64>, draft: InvoiceDraft) -> Result<Invoice> {
        let payload = draft.to_payload().map_err(Error::from)?;

        match id {
            Some(id) => {
                debug!("updating invoice {}", id);
                self.invoices.update(id, &payload).await
            }
            None => {
                debug!(
                    "creating invoice for supplier {} with {} items",
                    payload.supplier.id,
                    payload.items.len()
                );
                self.invoices.create(&payload).await
            }
        }
    }

    async fn delete_invoice(&self, id: i64) -> Result<()> {
        debug!("deleting invoice {}", id);
        self.invoices.delete(id).await
    }

    async fn default_unit_price(&self, product_id: i64) -> Result<Decimal> {
        let product = self.products.get(product_id).await?;
        Ok(product.purchase_price)
    }
}
