//! Promos Config

use clap::Args;

/// Status returned when the store fails while deleting a single promo.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum DeleteFailureStatus {
    /// 404 Not Found.
    #[default]
    NotFound,

    /// 500 Internal Server Error.
    InternalServerError,
}

/// Promo API settings.
#[derive(Debug, Args)]
pub struct PromosConfig {
    /// Status for store failures on `DELETE /promos/{code}` (not-found, internal-server-error)
    #[arg(
        long,
        env = "DELETE_FAILURE_STATUS",
        value_enum,
        default_value_t = DeleteFailureStatus::NotFound
    )]
    pub delete_failure_status: DeleteFailureStatus,
}
