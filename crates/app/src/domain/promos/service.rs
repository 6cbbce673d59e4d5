//! Promos service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::{debug, info};

use crate::domain::promos::{
    data::NewPromo, errors::PromosServiceError, records::PromoRecord, store::PromoStore,
};

#[derive(Clone)]
pub struct StorePromosService {
    store: Arc<dyn PromoStore>,
}

impl StorePromosService {
    #[must_use]
    pub fn new(store: Arc<dyn PromoStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PromosService for StorePromosService {
    async fn create_promo(&self, promo: NewPromo) -> Result<PromoRecord, PromosServiceError> {
        let record = promo.into_record(Timestamp::now())?;

        let created = self.store.insert(record)?;

        debug!(code = %created.code, target = %created.target, "promo created");

        Ok(created)
    }

    async fn list_promos(&self) -> Result<Vec<PromoRecord>, PromosServiceError> {
        Ok(self.store.list_all()?)
    }

    async fn search_promos(&self, filter: &str) -> Result<Vec<PromoRecord>, PromosServiceError> {
        Ok(self.store.find_by_code_or_target(filter)?)
    }

    async fn delete_promo(&self, code: &str) -> Result<(), PromosServiceError> {
        let removed = self.store.remove(code)?;

        debug!(code, removed, "promo delete requested");

        Ok(())
    }

    async fn delete_all_promos(&self) -> Result<(), PromosServiceError> {
        let removed = self.store.remove_all()?;

        info!(removed, "removed all promos");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait PromosService: Send + Sync {
    /// Creates a promo, applying default target and validity window.
    async fn create_promo(&self, promo: NewPromo) -> Result<PromoRecord, PromosServiceError>;

    /// Retrieves all promos ordered by code.
    async fn list_promos(&self) -> Result<Vec<PromoRecord>, PromosServiceError>;

    /// Retrieves promos whose code or target equals `filter`.
    async fn search_promos(&self, filter: &str) -> Result<Vec<PromoRecord>, PromosServiceError>;

    /// Deletes the promo with the given code. Succeeds when nothing matched.
    async fn delete_promo(&self, code: &str) -> Result<(), PromosServiceError>;

    /// Deletes every promo.
    async fn delete_all_promos(&self) -> Result<(), PromosServiceError>;
}
