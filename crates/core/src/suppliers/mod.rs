pub mod suppliers_model;
pub mod suppliers_service;
pub mod suppliers_traits;

pub use suppliers_model::{Supplier, SupplierDraft};
pub use suppliers_service::SupplierService;
pub use suppliers_traits::{SupplierServiceTrait, SuppliersApiTrait};
