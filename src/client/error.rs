use std::error::Error as StdError;
use std::fmt;

use crate::domain::{ErrorCode, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq)]
/// A response that OneWaySMS (or the HTTP layer in front of it) classified as a failure.
pub struct GatewayError {
    code: ErrorCode,
    message: String,
    status: u16,
}

impl GatewayError {
    /// Create an error carrying the fixed message for `code`.
    pub fn new(code: ErrorCode, status: u16) -> Self {
        Self {
            code,
            message: code.message().to_owned(),
            status,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status of the response that produced this error.
    pub fn status(&self) -> u16 {
        self.status
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = reqwest::StatusCode::from_u16(self.status)
            .ok()
            .and_then(|status| status.canonical_reason())
            .unwrap_or_default();
        write!(
            f,
            "OneWaySMS: Error {} ({reason}): {}",
            self.status, self.message
        )
    }
}

impl StdError for GatewayError {}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`crate::OneWayClient`].
///
/// - [`OneWayError::Transport`] carries the HTTP client error untouched,
/// - [`OneWayError::Gateway`] is a classified gateway response,
/// - [`OneWayError::Validation`] is raised before anything is sent.
pub enum OneWayError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl OneWayError {
    /// Gateway classification, if this is a [`OneWayError::Gateway`].
    pub fn gateway_code(&self) -> Option<ErrorCode> {
        match self {
            Self::Gateway(err) => Some(err.code()),
            _ => None,
        }
    }
}
