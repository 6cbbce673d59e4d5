//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{AuthService, AuthServiceError, JwtAuthService},
    domain::promos::{InMemoryPromoStore, PromosService, StorePromosService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to load bearer token validation keys")]
    Auth(#[source] AuthServiceError),
}

#[derive(Clone)]
pub struct AppContext {
    pub promos: Arc<dyn PromosService>,

    /// Bearer token validation, absent when authentication is switched off.
    pub auth: Option<Arc<dyn AuthService>>,
}

impl AppContext {
    /// Build an application context over a fresh, empty in-memory store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            promos: Arc::new(StorePromosService::new(Arc::new(InMemoryPromoStore::new()))),
            auth: None,
        }
    }

    /// Enable bearer token validation against the given issuer and audience.
    ///
    /// # Errors
    ///
    /// Returns an error when the issuer's metadata or signing keys cannot be loaded.
    pub async fn with_oauth(self, issuer: &str, audience: &str) -> Result<Self, AppInitError> {
        let auth = JwtAuthService::discover(issuer, audience)
            .await
            .map_err(AppInitError::Auth)?;

        Ok(Self {
            auth: Some(Arc::new(auth)),
            ..self
        })
    }
}
