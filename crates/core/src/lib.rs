//! Back-office core - domain entities, services, and traits.
//!
//! This crate contains the client-side business logic for the storefront
//! admin dashboard: the category hierarchy, the product catalog, the
//! supplier/invoice ledger, form validation, and session token handling.
//! It is transport-agnostic and defines remote-access traits that are
//! implemented by the `backoffice-api` crate.

pub mod categories;
pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod invoices;
pub mod products;
pub mod session;
pub mod suppliers;
pub mod uploads;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
