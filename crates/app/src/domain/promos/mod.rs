//! Promos

pub mod data;
pub mod errors;
pub mod records;
pub mod service;
pub mod store;

pub use errors::{PromoStoreError, PromosServiceError};
pub use service::*;
pub use store::{InMemoryPromoStore, MockPromoStore, PromoStore};
