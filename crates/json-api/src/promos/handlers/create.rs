//! Create Promo Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    extensions::*,
    promos::{
        errors::into_status_error,
        models::{CreatePromoRequest, PromoResponse},
    },
    state::State,
};

/// Create Promo Handler
#[endpoint(
    tags("promos"),
    summary = "Create Promo",
    security(("bearer_auth" = ["promos:create"])),
    responses(
        (status_code = StatusCode::CREATED, description = "Promo created"),
        (status_code = StatusCode::CONFLICT, description = "Promo code already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::FORBIDDEN, description = "Forbidden"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreatePromoRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<PromoResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let promo = state
        .app
        .promos
        .create_promo(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(promo.into()))
}
