use async_trait::async_trait;

use crate::errors::Result;

use super::{HelloResponse, LoginRequest, SignupRequest, TokenPair};

/// Auth endpoint operations.
///
/// `login` and `signup` persist the returned token pair on success.
/// `refresh` rewrites both stored tokens on success and leaves the store
/// untouched on failure. `logout` always clears the store, even when the
/// server call fails.
#[async_trait]
pub trait AuthApiTrait: Send + Sync {
    async fn login(&self, request: LoginRequest) -> Result<TokenPair>;
    async fn signup(&self, request: SignupRequest) -> Result<TokenPair>;
    async fn refresh(&self) -> Result<TokenPair>;
    async fn logout(&self) -> Result<()>;

    /// Authenticated greeting, used as the page-load session check.
    async fn hello(&self) -> Result<HelloResponse>;
}
