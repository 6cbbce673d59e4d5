//! Bearer token guards for promo routes

mod middleware;
mod routes;

pub(crate) use middleware::RequireScope;
pub(crate) use routes::PromoRoute;
