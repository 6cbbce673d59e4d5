//! Server configuration module

use clap::Parser;

use crate::config::{
    auth::AuthConfig, observability::LoggingConfig, promos::PromosConfig,
    server::ServerRuntimeConfig,
};

pub(crate) mod auth;
pub(crate) mod observability;
pub(crate) mod promos;
pub(crate) mod server;

pub(crate) use observability::LogFormat;
pub(crate) use promos::DeleteFailureStatus;

/// Promos resource server configuration
#[derive(Debug, Parser)]
#[command(
    name = "promos-json",
    about = "Launches the promos resource server",
    long_about = None
)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Bearer token authentication settings.
    #[command(flatten)]
    pub auth: AuthConfig,

    /// Promo API behaviour settings.
    #[command(flatten)]
    pub promos: PromosConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}
