//! HTTP implementations of the back-office remote-access traits.
//!
//! The domain crate defines the traits; this crate talks to the REST
//! backend with reqwest. All endpoint types share one [`ApiClient`], which
//! owns bearer attachment and the refresh-and-replay handling of expired
//! access tokens.
//!
//! # Example
//!
//! ```ignore
//! let tokens = Arc::new(KeyringTokenStore::new("backoffice"));
//! let client = Arc::new(ApiClient::new(ApiConfig::default(), tokens)?);
//! let auth = AuthApi::new(client.clone());
//! auth.login(LoginRequest { email, password }).await?;
//! let categories = CategoriesApi::new(client.clone()).list().await?;
//! ```

pub mod auth;
pub mod categories;
pub mod client;
pub mod invoices;
pub mod products;
pub mod suppliers;

#[cfg(test)]
mod client_tests;

pub use auth::AuthApi;
pub use categories::CategoriesApi;
pub use client::{ApiClient, ApiConfig};
pub use invoices::InvoicesApi;
pub use products::ProductsApi;
pub use suppliers::SuppliersApi;
