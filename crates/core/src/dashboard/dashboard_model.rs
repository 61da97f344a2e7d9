use serde::Serialize;

use crate::categories::Category;
use crate::invoices::Invoice;
use crate::products::ProductPage;
use crate::suppliers::Supplier;

/// Everything the back office shows after a successful load.
///
/// The snapshot is rebuilt wholesale on every load; callers replace the
/// previous value instead of patching it in place.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardState {
    pub categories: Vec<Category>,
    pub products: ProductPage,
    pub suppliers: Vec<Supplier>,
    pub invoices: Vec<Invoice>,
}
