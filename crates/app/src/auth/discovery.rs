//! OAuth 2.0 authorization server metadata discovery (RFC 8414).

use jsonwebtoken::jwk::JwkSet;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::auth::DiscoveryError;

/// Well-known path of the authorization server metadata document.
pub const METADATA_PATH: &str = "/.well-known/oauth-authorization-server";

/// The parts of the metadata document the resource server relies on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthorizationServerMetadata {
    pub issuer: String,
    pub jwks_uri: String,
}

impl AuthorizationServerMetadata {
    fn ensure_issuer(&self, expected: &str) -> Result<(), DiscoveryError> {
        if normalise_issuer(&self.issuer) == normalise_issuer(expected) {
            return Ok(());
        }

        Err(DiscoveryError::IssuerMismatch {
            expected: expected.to_owned(),
            actual: self.issuer.clone(),
        })
    }
}

/// Location of the metadata document for `issuer`.
#[must_use]
pub fn metadata_url(issuer: &str) -> String {
    format!("{}{METADATA_PATH}", normalise_issuer(issuer))
}

/// Fetch and check the metadata document published by `issuer`.
///
/// # Errors
///
/// Returns an error when the request fails, the response is not valid
/// metadata, or the document names a different issuer.
pub async fn discover(
    client: &Client,
    issuer: &str,
) -> Result<AuthorizationServerMetadata, DiscoveryError> {
    let url = metadata_url(issuer);

    debug!(%url, "fetching authorization server metadata");

    let metadata: AuthorizationServerMetadata = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    metadata.ensure_issuer(issuer)?;

    Ok(metadata)
}

/// Fetch the signing key set published at `jwks_uri`.
///
/// # Errors
///
/// Returns an error when the request fails or the body is not a JWK set.
pub async fn fetch_jwks(client: &Client, jwks_uri: &str) -> Result<JwkSet, DiscoveryError> {
    debug!(jwks_uri, "fetching signing keys");

    Ok(client
        .get(jwks_uri)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?)
}

fn normalise_issuer(issuer: &str) -> &str {
    issuer.trim_end_matches('/')
}
