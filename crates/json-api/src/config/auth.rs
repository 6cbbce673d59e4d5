//! Auth Config

use clap::Args;

/// Bearer token authentication settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Issuer URI for the Authorization Server
    #[arg(long, visible_alias = "iss", env = "ISSUER")]
    pub issuer: String,

    /// Audience URI for this Resource Server
    #[arg(
        long,
        visible_alias = "aud",
        env = "AUDIENCE",
        default_value = "http://api.example.com"
    )]
    pub audience: String,

    /// Require scoped bearer tokens on promo routes
    #[arg(long, env = "AUTH_ENABLED", default_value_t = false)]
    pub auth_enabled: bool,
}
