//! Delete Promo Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{extensions::*, promos::errors::into_delete_status_error, state::State};

/// Delete Promo Handler
///
/// Deleting a code that does not exist succeeds.
#[endpoint(
    tags("promos"),
    summary = "Delete Promo",
    security(("bearer_auth" = ["promos:delete"])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Promo deleted or absent"),
        (status_code = StatusCode::NOT_FOUND, description = "Store failure (default)"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::FORBIDDEN, description = "Forbidden"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    code: PathParam<String>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .promos
        .delete_promo(&code.into_inner())
        .await
        .map_err(|error| into_delete_status_error(error, state.delete_failure_status))?;

    Ok(StatusCode::NO_CONTENT)
}
