//! Signing fixtures for token validation tests.

use jsonwebtoken::{
    Algorithm, EncodingKey, Header, encode, get_current_timestamp, jwk::JwkSet,
};
use serde_json::{Value, json};

use crate::auth::TokenRules;

pub(crate) const TEST_ISSUER: &str = "https://issuer.example/oauth2/default";
pub(crate) const TEST_AUDIENCE: &str = "http://api.example.com";
pub(crate) const TEST_KID: &str = "test-key";
pub(crate) const TEST_SECRET: &[u8] = b"promos-resource-server-test-signing-secret";

/// `TEST_SECRET`, base64url encoded.
pub(crate) const TEST_SECRET_B64: &str = "cHJvbW9zLXJlc291cmNlLXNlcnZlci10ZXN0LXNpZ25pbmctc2VjcmV0";

pub(crate) fn test_rules() -> TokenRules {
    TokenRules {
        issuer: TEST_ISSUER.to_string(),
        audience: TEST_AUDIENCE.to_string(),
    }
}

pub(crate) fn test_keys() -> Result<JwkSet, serde_json::Error> {
    serde_json::from_value(json!({
        "keys": [{ "kty": "oct", "kid": TEST_KID, "alg": "HS256", "k": TEST_SECRET_B64 }]
    }))
}

pub(crate) fn sign(claims: Value) -> Result<String, jsonwebtoken::errors::Error> {
    let mut header = Header::new(Algorithm::HS256);

    header.kid = Some(TEST_KID.to_string());

    encode(&header, &claims, &EncodingKey::from_secret(TEST_SECRET))
}

/// Issuer, audience and a five minute expiry, without scopes.
pub(crate) fn unexpired_claims() -> Value {
    json!({
        "iss": TEST_ISSUER,
        "aud": TEST_AUDIENCE,
        "exp": get_current_timestamp() + 300
    })
}
