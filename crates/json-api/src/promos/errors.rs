//! Promo Errors

use salvo::http::StatusError;
use tracing::error;

use promos_app::domain::promos::PromosServiceError;

use crate::config::DeleteFailureStatus;

pub(crate) fn into_status_error(error: PromosServiceError) -> StatusError {
    match error {
        PromosServiceError::AlreadyExists => {
            StatusError::conflict().brief("Promo code already exists")
        }
        PromosServiceError::MissingRequiredData(field) => {
            StatusError::bad_request().brief(format!("Missing required field: {field}"))
        }
        PromosServiceError::InvalidData(reason) => StatusError::bad_request().brief(reason),
        PromosServiceError::Store(source) => {
            error!("promo store failure: {source}");

            StatusError::internal_server_error()
        }
    }
}

/// Single promo deletes report store failures with a configurable status.
pub(crate) fn into_delete_status_error(
    error: PromosServiceError,
    failure_status: DeleteFailureStatus,
) -> StatusError {
    let PromosServiceError::Store(source) = error else {
        return into_status_error(error);
    };

    error!("failed to delete promo: {source}");

    match failure_status {
        DeleteFailureStatus::NotFound => {
            StatusError::not_found().brief("Promo could not be deleted")
        }
        DeleteFailureStatus::InternalServerError => StatusError::internal_server_error(),
    }
}
