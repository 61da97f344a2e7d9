pub mod invoices_model;
pub mod invoices_service;
pub mod invoices_traits;
pub mod ledger;


pub use invoices_model::{
    Invoice, InvoiceDraft, InvoiceItem, InvoiceLine, NewInvoice, SupplierRef,
};
pub use invoices_service::InvoiceService;
pub use invoices_traits::{InvoiceServiceTrait, InvoicesApiTrait};
pub use ledger::{format_amount, line_total};
