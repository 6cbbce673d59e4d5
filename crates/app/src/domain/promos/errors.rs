//! Promo store and service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromoStoreError {
    #[error("promo with code {0:?} already exists")]
    DuplicateKey(String),

    #[error("promo store lock poisoned")]
    Poisoned,
}

#[derive(Debug, Error)]
pub enum PromosServiceError {
    #[error("promo already exists")]
    AlreadyExists,

    #[error("missing required data: {0}")]
    MissingRequiredData(&'static str),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("storage error")]
    Store(#[source] PromoStoreError),
}

impl From<PromoStoreError> for PromosServiceError {
    fn from(error: PromoStoreError) -> Self {
        match error {
            PromoStoreError::DuplicateKey(_) => Self::AlreadyExists,
            PromoStoreError::Poisoned => Self::Store(error),
        }
    }
}
