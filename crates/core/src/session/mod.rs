//! Session module - token persistence and auth endpoint contracts.

mod session_model;
mod session_traits;
mod token_store;

pub use session_model::{HelloResponse, LoginRequest, RefreshRequest, SignupRequest, TokenPair};
pub use session_traits::AuthApiTrait;
pub use token_store::{KeyringTokenStore, MemoryTokenStore, TokenStore};
