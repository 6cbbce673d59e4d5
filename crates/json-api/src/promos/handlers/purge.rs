//! Delete All Promos Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{extensions::*, promos::errors::into_status_error, state::State};

/// Delete All Promos Handler
#[endpoint(
    tags("promos"),
    summary = "Delete All Promos",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Every promo removed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .promos
        .delete_all_promos()
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}
