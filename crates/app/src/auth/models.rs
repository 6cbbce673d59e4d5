//! Auth data models.

use serde::Deserialize;

use crate::auth::{GrantedScopes, Scope};

/// Claims read from a validated access token.
///
/// Registered claims (`iss`, `aud`, `exp`) are checked by the verifier and
/// not repeated here.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct AccessTokenClaims {
    #[serde(default)]
    pub sub: Option<String>,

    /// RFC 8693 style space-delimited scopes.
    #[serde(default)]
    pub scope: Option<ScopeClaim>,

    /// Okta style scope list.
    #[serde(default)]
    pub scp: Option<ScopeClaim>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum ScopeClaim {
    Delimited(String),
    List(Vec<String>),
}

impl ScopeClaim {
    fn into_scopes(self) -> Vec<String> {
        match self {
            Self::Delimited(value) => value.split_whitespace().map(str::to_owned).collect(),
            Self::List(values) => values,
        }
    }
}

impl AccessTokenClaims {
    pub(crate) fn into_principal(self) -> Principal {
        let mut scopes = GrantedScopes::default();

        for claim in [self.scope, self.scp].into_iter().flatten() {
            scopes.extend(claim.into_scopes());
        }

        Principal {
            subject: self.sub,
            scopes,
        }
    }
}

/// Caller identity established from a bearer token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Principal {
    pub subject: Option<String>,
    pub scopes: GrantedScopes,
}

impl Principal {
    #[must_use]
    pub fn has_scope(&self, scope: Scope) -> bool {
        self.scopes.contains(scope)
    }
}
