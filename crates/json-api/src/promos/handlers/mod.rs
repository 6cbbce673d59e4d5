//! Promo Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod index;
pub(crate) mod purge;
pub(crate) mod search;
