//! Auth service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("authorization server request failed")]
    Http(#[from] reqwest::Error),

    #[error("metadata issuer {actual:?} does not match configured issuer {expected:?}")]
    IssuerMismatch { expected: String, actual: String },
}

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("invalid access token")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    #[error("no signing key matches key id {0:?}")]
    UnknownKey(Option<String>),

    #[error("signing keys unavailable")]
    KeysUnavailable,

    #[error("signing key discovery failed")]
    Discovery(#[from] DiscoveryError),
}

impl From<jsonwebtoken::errors::Error> for AuthServiceError {
    fn from(error: jsonwebtoken::errors::Error) -> Self {
        Self::InvalidToken(error)
    }
}
