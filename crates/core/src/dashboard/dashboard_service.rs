//! Initial dashboard load.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::categories::CategoriesApiTrait;
use crate::constants::DEFAULT_PAGE_SIZE;
use crate::errors::Result;
use crate::invoices::InvoicesApiTrait;
use crate::products::ProductsApiTrait;
use crate::session::AuthApiTrait;
use crate::suppliers::SuppliersApiTrait;

use super::DashboardState;

/// Dashboard snapshot loading.
#[async_trait]
pub trait DashboardServiceTrait: Send + Sync {
    async fn load(&self, page: u32) -> Result<DashboardState>;
}

pub struct DashboardService {
    auth: Arc<dyn AuthApiTrait>,
    categories: Arc<dyn CategoriesApiTrait>,
    products: Arc<dyn ProductsApiTrait>,
    suppliers: Arc<dyn SuppliersApiTrait>,
    invoices: Arc<dyn InvoicesApiTrait>,
}

impl DashboardService {
    pub fn new(
        auth: Arc<dyn AuthApiTrait>,
        categories: Arc<dyn CategoriesApiTrait>,
        products: Arc<dyn ProductsApiTrait>,
        suppliers: Arc<dyn SuppliersApiTrait>,
        invoices: Arc<dyn InvoicesApiTrait>,
    ) -> Self {
        DashboardService {
            auth,
            categories,
            products,
            suppliers,
            invoices,
        }
    }
}

#[async_trait]
impl DashboardServiceTrait for DashboardService {
    /// Probes the session first, then loads all four datasets together.
    ///
    /// The probe forces an expired access token through the refresh path
    /// before the dataset requests fan out, so at most one refresh runs.
    async fn load(&self, page: u32) -> Result<DashboardState> {
        let hello = self.auth.hello().await?;
        debug!("session verified for {:?}", hello.email);

        let (categories, products, suppliers, invoices) = futures::try_join!(
            self.categories.list(),
            self.products.list(page, DEFAULT_PAGE_SIZE),
            self.suppliers.list(),
            self.invoices.list(),
        )?;

        Ok(DashboardState {
            categories,
            products,
            suppliers,
            invoices,
        })
    }
}
