//! Core error types for the back-office client.
//!
//! This module defines transport-agnostic error types. HTTP-specific errors
//! (status codes, connection failures) are converted to these types by the
//! api crate.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the back-office client.
#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] HttpError),

    /// The stored session could not be refreshed; the caller decides whether
    /// to clear the token store and force a new login.
    #[error("Session expired, sign in again")]
    SessionExpired,

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Token store error: {0}")]
    TokenStore(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Errors raised while talking to the remote API.
#[derive(Error, Debug)]
pub enum HttpError {
    /// The request never produced a response (DNS, connect, timeout).
    #[error("request failed: {0}")]
    Transport(String),

    /// A non-2xx response, carrying the server-supplied message when the
    /// error body could be parsed.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// A 2xx response whose body did not parse as the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("required field '{0}' is missing")]
    MissingField(String),

    /// Per-field form errors collected by a draft validator.
    #[error("{0}")]
    Form(FieldErrors),
}

/// A single field-level validation message, keyed by the wire field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        FieldError {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// The full error list for a rejected form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldErrors(pub Vec<FieldError>);

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
            first = false;
        }
        Ok(())
    }
}

// === From implementations for common error types ===

impl From<Vec<FieldError>> for Error {
    fn from(errors: Vec<FieldError>) -> Self {
        Error::Validation(ValidationError::Form(FieldErrors(errors)))
    }
}

impl From<keyring::Error> for Error {
    fn from(err: keyring::Error) -> Self {
        Error::TokenStore(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Http(HttpError::Decode(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
