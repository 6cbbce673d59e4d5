//! Search Promos Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    promos::{errors::into_status_error, models::PromoResponse},
    state::State,
};

/// Search Promos Handler
///
/// Matches promos whose code or target equals the filter exactly.
#[endpoint(
    tags("promos"),
    summary = "Search Promos",
    security(("bearer_auth" = ["promos:read"])),
    responses(
        (status_code = StatusCode::OK, description = "Matching promos, possibly none"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::FORBIDDEN, description = "Forbidden"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    filter: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<Vec<PromoResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let promos = state
        .app
        .promos
        .search_promos(&filter.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(promos.into_iter().map(PromoResponse::from).collect()))
}
