//! Supplier service implementation.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::errors::Result;

use super::{Supplier, SupplierDraft, SupplierServiceTrait, SuppliersApiTrait};

pub struct SupplierService {
    api: Arc<dyn SuppliersApiTrait>,
}

impl SupplierService {
    pub fn new(api: Arc<dyn SuppliersApiTrait>) -> Self {
        SupplierService { api }
    }
}

#[async_trait]
impl SupplierServiceTrait for SupplierService {
    async fn get_suppliers(&self) -> Result<Vec<Supplier>> {
        self.api.list().await
    }

    async fn get_supplier(&self, id: i64) -> Result<Supplier> {
        self.api.get(id).await
    }

    async fn save_supplier(&self, id: Option<i64>, draft: SupplierDraft) -> Result<Supplier> {
        let errors = draft.validate();
        if !errors.is_empty() {
            return Err(errors.into());
        }

        match id {
            Some(id) => {
                debug!("updating supplier {}", id);
                self.api.update(id, &draft).await
            }
            None => {
                debug!("creating supplier '{}'", draft.name);
                self.api.create(&draft).await
            }
        }
    }

    async fn delete_supplier(&self, id: i64) -> Result<()> {
        debug!("deleting supplier {}", id);
        self.api.delete(id).await
    }
}
