//! Auth endpoint implementation.

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, error};

use backoffice_core::constants::AUTH_ENDPOINT;
use backoffice_core::errors::{Error, HttpError, Result};
use backoffice_core::session::{
    AuthApiTrait, HelloResponse, LoginRequest, SignupRequest, TokenPair,
};

use crate::client::ApiClient;

pub struct AuthApi {
    client: Arc<ApiClient>,
}

impl AuthApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        AuthApi { client }
    }

    fn endpoint(&self, action: &str) -> String {
        format!("{}/{}", AUTH_ENDPOINT, action)
    }

    /// Posts credentials without a bearer header and stores the issued pair.
    async fn post_credentials<B: serde::Serialize>(
        &self,
        action: &str,
        body: &B,
    ) -> Result<TokenPair> {
        let response = self
            .client
            .http()
            .post(self.client.url(&self.endpoint(action)))
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Http(HttpError::Transport(e.to_string())))?;

        let pair: TokenPair = ApiClient::parse_json(response).await?;
        self.client.tokens().set(&pair)?;
        Ok(pair)
    }
}

#[async_trait]
impl AuthApiTrait for AuthApi {
    async fn login(&self, request: LoginRequest) -> Result<TokenPair> {
        debug!("logging in as {}", request.email);
        self.post_credentials("login", &request).await
    }

    async fn signup(&self, request: SignupRequest) -> Result<TokenPair> {
        debug!("signing up {}", request.email);
        self.post_credentials("signup", &request).await
    }

    async fn refresh(&self) -> Result<TokenPair> {
        let stale = self
            .client
            .tokens()
            .get()?
            .map(|pair| pair.access_token);
        self.client.refresh_session(stale.as_deref()).await?;
        self.client.tokens().get()?.ok_or(Error::SessionExpired)
    }

    async fn logout(&self) -> Result<()> {
        // Best effort on the server side; local tokens go away regardless.
        let result = self
            .client
            .send_with_retry(|| Ok(self.client.http().post(self.client.url(&self.endpoint("logout")))))
            .await;
        if let Err(e) = result {
            error!("server-side logout failed: {}", e);
        }
        self.client.tokens().clear()
    }

    async fn hello(&self) -> Result<HelloResponse> {
        self.client.get_json(&self.endpoint("hello")).await
    }
}
