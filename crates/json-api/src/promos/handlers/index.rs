//! List Promos Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    promos::{errors::into_status_error, models::PromoResponse},
    state::State,
};

/// List Promos Handler
#[endpoint(
    tags("promos"),
    summary = "List Promos",
    security(("bearer_auth" = ["promos:read"])),
    responses(
        (status_code = StatusCode::OK, description = "Every promo, ordered by code"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::FORBIDDEN, description = "Forbidden"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<PromoResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let promos = state
        .app
        .promos
        .list_promos()
        .await
        .map_err(into_status_error)?;

    Ok(Json(promos.into_iter().map(PromoResponse::from).collect()))
}
