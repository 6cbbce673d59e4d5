//! Access token signature and claim validation.

use jsonwebtoken::{
    Algorithm, DecodingKey, Validation, decode, decode_header,
    jwk::{AlgorithmParameters, Jwk, JwkSet, KeyAlgorithm},
};

use crate::auth::{AuthServiceError, Principal, models::AccessTokenClaims};

/// Issuer and audience every accepted token must carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRules {
    pub issuer: String,
    pub audience: String,
}

/// Validate `token` against `keys`, returning the caller it identifies.
///
/// Accepted algorithms come from the selected key: its `alg` when published,
/// otherwise every algorithm of its key family. A token whose header names
/// anything else is rejected.
pub(crate) fn verify(
    token: &str,
    keys: &JwkSet,
    rules: &TokenRules,
) -> Result<Principal, AuthServiceError> {
    let header = decode_header(token)?;
    let jwk = select_key(keys, header.kid.as_deref())?;
    let key = DecodingKey::from_jwk(jwk)?;

    let mut validation = Validation::default();

    validation.algorithms = allowed_algorithms(jwk);

    validation.set_issuer(&[rules.issuer.as_str()]);
    validation.set_audience(&[rules.audience.as_str()]);
    validation.set_required_spec_claims(&["exp", "iss", "aud"]);

    let data = decode::<AccessTokenClaims>(token, &key, &validation)?;

    Ok(data.claims.into_principal())
}

fn allowed_algorithms(jwk: &Jwk) -> Vec<Algorithm> {
    if let Some(algorithm) = jwk.common.key_algorithm.as_ref().and_then(signing_algorithm) {
        return vec![algorithm];
    }

    match jwk.algorithm {
        AlgorithmParameters::RSA(_) => vec![
            Algorithm::RS256,
            Algorithm::RS384,
            Algorithm::RS512,
            Algorithm::PS256,
            Algorithm::PS384,
            Algorithm::PS512,
        ],
        AlgorithmParameters::EllipticCurve(_) => vec![Algorithm::ES256, Algorithm::ES384],
        AlgorithmParameters::OctetKey(_) => {
            vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512]
        }
        AlgorithmParameters::OctetKeyPair(_) => vec![Algorithm::EdDSA],
    }
}

/// Encryption algorithms never sign access tokens.
fn signing_algorithm(algorithm: &KeyAlgorithm) -> Option<Algorithm> {
    match algorithm {
        KeyAlgorithm::HS256 => Some(Algorithm::HS256),
        KeyAlgorithm::HS384 => Some(Algorithm::HS384),
        KeyAlgorithm::HS512 => Some(Algorithm::HS512),
        KeyAlgorithm::ES256 => Some(Algorithm::ES256),
        KeyAlgorithm::ES384 => Some(Algorithm::ES384),
        KeyAlgorithm::RS256 => Some(Algorithm::RS256),
        KeyAlgorithm::RS384 => Some(Algorithm::RS384),
        KeyAlgorithm::RS512 => Some(Algorithm::RS512),
        KeyAlgorithm::PS256 => Some(Algorithm::PS256),
        KeyAlgorithm::PS384 => Some(Algorithm::PS384),
        KeyAlgorithm::PS512 => Some(Algorithm::PS512),
        KeyAlgorithm::EdDSA => Some(Algorithm::EdDSA),
        _ => None,
    }
}

fn select_key<'a>(keys: &'a JwkSet, kid: Option<&str>) -> Result<&'a Jwk, AuthServiceError> {
    match kid {
        Some(kid) => keys
            .find(kid)
            .ok_or_else(|| AuthServiceError::UnknownKey(Some(kid.to_owned()))),
        None => match keys.keys.as_slice() {
            [only] => Ok(only),
            _ => Err(AuthServiceError::UnknownKey(None)),
        },
    }
}
