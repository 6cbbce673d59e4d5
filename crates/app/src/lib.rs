//! Shared promo domain, in-memory storage and bearer token authentication.

pub mod auth;
pub mod context;
pub mod domain;

#[cfg(test)]
mod test;
