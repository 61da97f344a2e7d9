use async_trait::async_trait;

use crate::errors::Result;
use crate::suppliers::suppliers_model::{Supplier, SupplierDraft};

/// Remote supplier endpoints.
#[async_trait]
pub trait SuppliersApiTrait: Send + Sync {
    async fn list(&self) -> Result<Vec<Supplier>>;
    async fn get(&self, id: i64) -> Result<Supplier>;
    async fn create(&self, draft: &SupplierDraft) -> Result<Supplier>;
    async fn update(&self, id: i64, draft: &SupplierDraft) -> Result<Supplier>;
    async fn delete(&self, id: i64) -> Result<()>;
}

/// Supplier workflow offered to callers.
#[async_trait]
pub trait SupplierServiceTrait: Send + Sync {
    async fn get_suppliers(&self) -> Result<Vec<Supplier>>;
    async fn get_supplier(&self, id: i64) -> Result<Supplier>;
    async fn save_supplier(&self, id: Option<i64>, draft: SupplierDraft) -> Result<Supplier>;
    async fn delete_supplier(&self, id: i64) -> Result<()>;
}
