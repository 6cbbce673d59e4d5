//! Promo Domain Concerns

pub mod promos;
