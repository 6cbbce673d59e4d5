//! App Router

use salvo::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, Cors},
    http::{HeaderName, Method},
    prelude::*,
};

use crate::{
    auth::{PromoRoute, RequireScope},
    observability, promos,
};

/// Request headers accepted from cross-origin callers.
const CORS_ALLOWED_HEADERS: [&str; 11] = [
    "authorization",
    "withcredentials",
    "x-requested-with",
    "x-forwarded-for",
    "x-real-ip",
    "x-customheader",
    "user-agent",
    "keep-alive",
    "host",
    "accept",
    "connection",
];

fn guarded(route: PromoRoute) -> Router {
    Router::new().hoop(RequireScope::for_route(route))
}

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("promos")
                .push(guarded(PromoRoute::Create).post(promos::create::handler))
                .push(guarded(PromoRoute::List).get(promos::index::handler))
                .push(
                    Router::with_path("{filter}")
                        .push(guarded(PromoRoute::Search).get(promos::search::handler)),
                )
                .push(
                    Router::with_path("{code}")
                        .push(guarded(PromoRoute::Delete).delete(promos::delete::handler)),
                ),
        )
        .push(
            Router::with_path("delete")
                .push(guarded(PromoRoute::DeleteAll).get(promos::purge::handler)),
        )
}

fn cors() -> Cors {
    let headers = CORS_ALLOWED_HEADERS
        .into_iter()
        .map(HeaderName::from_static)
        .chain([salvo::http::header::CONTENT_TYPE]);

    Cors::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list(headers))
}

/// Wrap the router with request logging and CORS.
///
/// Service level hoops also run for requests no route matches, so
/// preflights and 404s are answered and logged.
pub(crate) fn service(router: Router) -> Service {
    Service::new(router)
        .hoop(observability::request_logging)
        .hoop(cors().into_handler())
}
