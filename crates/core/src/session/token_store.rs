use std::sync::RwLock;

use keyring::Entry;

use crate::constants::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
use crate::errors::{Error, Result};

use super::TokenPair;

/// Persistent storage for the session token pair.
///
/// Absence of tokens is not an error; it simply means no session.
pub trait TokenStore: Send + Sync {
    fn get(&self) -> Result<Option<TokenPair>>;
    fn set(&self, tokens: &TokenPair) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// Token store backed by the operating system keyring.
pub struct KeyringTokenStore {
    service: String,
}

impl KeyringTokenStore {
    pub fn new(service: impl Into<String>) -> Self {
        KeyringTokenStore {
            service: service.into(),
        }
    }

    fn read(&self, key: &str) -> Result<Option<String>> {
        let entry = Entry::new(&self.service, key).map_err(Error::from)?;
        match entry.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(Error::from(e)),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let entry = Entry::new(&self.service, key).map_err(Error::from)?;
        entry.set_password(value).map_err(Error::from)
    }

    fn delete(&self, key: &str) -> Result<()> {
        let entry = Entry::new(&self.service, key).map_err(Error::from)?;
        match entry.delete_password() {
            Ok(_) => Ok(()),
            // If no entry, it's already "deleted"
            Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(Error::from(e)),
        }
    }
}

impl TokenStore for KeyringTokenStore {
    fn get(&self) -> Result<Option<TokenPair>> {
        let access = self.read(ACCESS_TOKEN_KEY)?;
        let refresh = self.read(REFRESH_TOKEN_KEY)?;
        match (access, refresh) {
            (Some(access_token), Some(refresh_token)) => Ok(Some(TokenPair {
                access_token,
                refresh_token,
            })),
            _ => Ok(None),
        }
    }

    fn set(&self, tokens: &TokenPair) -> Result<()> {
        self.write(ACCESS_TOKEN_KEY, &tokens.access_token)?;
        self.write(REFRESH_TOKEN_KEY, &tokens.refresh_token)
    }

    fn clear(&self) -> Result<()> {
        self.delete(ACCESS_TOKEN_KEY)?;
        self.delete(REFRESH_TOKEN_KEY)
    }
}

/// In-memory token store for tests and embedded use.
#[derive(Default)]
pub struct MemoryTokenStore {
    tokens: RwLock<Option<TokenPair>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tokens(tokens: TokenPair) -> Self {
        MemoryTokenStore {
            tokens: RwLock::new(Some(tokens)),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Result<Option<TokenPair>> {
        let tokens = self
            .tokens
            .read()
            .map_err(|_| Error::TokenStore("token store lock poisoned".to_string()))?;
        Ok(tokens.clone())
    }

    fn set(&self, tokens: &TokenPair) -> Result<()> {
        let mut guard = self
            .tokens
            .write()
            .map_err(|_| Error::TokenStore("token store lock poisoned".to_string()))?;
        *guard = Some(tokens.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut guard = self
            .tokens
            .write()
            .map_err(|_| Error::TokenStore("token store lock poisoned".to_string()))?;
        *guard = None;
        Ok(())
    }
}
