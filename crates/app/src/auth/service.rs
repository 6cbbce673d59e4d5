//! Auth service.

use std::{
    sync::{Mutex, RwLock},
    time::{Duration, Instant},
};

use async_trait::async_trait;
use jsonwebtoken::jwk::JwkSet;
use mockall::automock;
use reqwest::Client;
use tracing::{debug, info};

use crate::auth::{
    AuthServiceError, Principal,
    discovery::{self, AuthorizationServerMetadata},
    verifier::{self, TokenRules},
};

/// Minimum time between two key set refreshes triggered by unknown key ids.
const KEY_REFRESH_COOLDOWN: Duration = Duration::from_secs(60);

/// Validates bearer JWTs against the authorization server's published keys.
#[derive(Debug)]
pub struct JwtAuthService {
    rules: TokenRules,
    keys: RwLock<JwkSet>,
    jwks_uri: Option<String>,
    last_refresh: Mutex<Option<Instant>>,
    client: Client,
}

impl JwtAuthService {
    /// Discover the issuer's metadata and load its signing keys.
    ///
    /// # Errors
    ///
    /// Returns an error when the metadata or key set cannot be fetched.
    pub async fn discover(issuer: &str, audience: &str) -> Result<Self, AuthServiceError> {
        let client = Client::new();

        let AuthorizationServerMetadata { issuer, jwks_uri } =
            discovery::discover(&client, issuer).await?;

        let keys = discovery::fetch_jwks(&client, &jwks_uri).await?;

        info!(%issuer, %jwks_uri, keys = keys.keys.len(), "loaded signing keys");

        Ok(Self {
            rules: TokenRules {
                issuer,
                audience: audience.to_owned(),
            },
            keys: RwLock::new(keys),
            jwks_uri: Some(jwks_uri),
            last_refresh: Mutex::new(Some(Instant::now())),
            client,
        })
    }

    /// Validate against a fixed key set that is never refreshed.
    #[must_use]
    pub fn with_keys(rules: TokenRules, keys: JwkSet) -> Self {
        Self {
            rules,
            keys: RwLock::new(keys),
            jwks_uri: None,
            last_refresh: Mutex::new(None),
            client: Client::new(),
        }
    }

    fn verify_with_cached_keys(&self, token: &str) -> Result<Principal, AuthServiceError> {
        let keys = self
            .keys
            .read()
            .map_err(|_poisoned| AuthServiceError::KeysUnavailable)?;

        verifier::verify(token, &keys, &self.rules)
    }

    fn claim_refresh_slot(&self) -> Result<bool, AuthServiceError> {
        let mut last_refresh = self
            .last_refresh
            .lock()
            .map_err(|_poisoned| AuthServiceError::KeysUnavailable)?;

        if last_refresh.is_some_and(|at| at.elapsed() < KEY_REFRESH_COOLDOWN) {
            return Ok(false);
        }

        *last_refresh = Some(Instant::now());

        Ok(true)
    }

    async fn refresh_keys(&self, jwks_uri: &str) -> Result<(), AuthServiceError> {
        let keys = discovery::fetch_jwks(&self.client, jwks_uri).await?;

        info!(jwks_uri, keys = keys.keys.len(), "refreshed signing keys");

        *self
            .keys
            .write()
            .map_err(|_poisoned| AuthServiceError::KeysUnavailable)? = keys;

        Ok(())
    }
}

#[async_trait]
impl AuthService for JwtAuthService {
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<Principal, AuthServiceError> {
        let kid = match self.verify_with_cached_keys(bearer_token) {
            Err(AuthServiceError::UnknownKey(kid)) => kid,
            result => return result,
        };

        let Some(jwks_uri) = self.jwks_uri.as_deref() else {
            return Err(AuthServiceError::UnknownKey(kid));
        };

        if !self.claim_refresh_slot()? {
            debug!(?kid, "unknown signing key, refresh on cooldown");

            return Err(AuthServiceError::UnknownKey(kid));
        }

        debug!(?kid, "unknown signing key, refreshing key set");

        self.refresh_keys(jwks_uri).await?;

        self.verify_with_cached_keys(bearer_token)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Validate a bearer token and return the caller it identifies.
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<Principal, AuthServiceError>;
}
