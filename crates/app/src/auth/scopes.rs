//! OAuth scopes.

use std::{collections::BTreeSet, fmt};

/// Permission a route demands from the caller's access token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    PromosCreate,
    PromosRead,
    PromosDelete,
}

impl Scope {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PromosCreate => "promos:create",
            Self::PromosRead => "promos:read",
            Self::PromosDelete => "promos:delete",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scopes granted to an access token.
///
/// Unknown scopes are kept so tokens issued for several resource servers
/// still validate here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrantedScopes(BTreeSet<String>);

impl GrantedScopes {
    /// Parse an RFC 6749 space-delimited scope string.
    #[must_use]
    pub fn from_delimited(value: &str) -> Self {
        value.split_whitespace().map(str::to_owned).collect()
    }

    #[must_use]
    pub fn contains(&self, scope: Scope) -> bool {
        self.0.contains(scope.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl FromIterator<String> for GrantedScopes {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().filter(|scope| !scope.is_empty()).collect())
    }
}

impl Extend<String> for GrantedScopes {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.0
            .extend(iter.into_iter().filter(|scope| !scope.is_empty()));
    }
}
