//! Promo Store

use std::{
    collections::{BTreeMap, btree_map::Entry},
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use mockall::automock;

use crate::domain::promos::{errors::PromoStoreError, records::PromoRecord};

/// Promos held in memory, keyed and ordered by code.
///
/// Nothing is persisted: the collection lives exactly as long as the process.
#[derive(Debug, Default)]
pub struct InMemoryPromoStore {
    promos: RwLock<BTreeMap<String, PromoRecord>>,
}

impl InMemoryPromoStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<String, PromoRecord>>, PromoStoreError> {
        self.promos
            .read()
            .map_err(|_poisoned| PromoStoreError::Poisoned)
    }

    fn write(
        &self,
    ) -> Result<RwLockWriteGuard<'_, BTreeMap<String, PromoRecord>>, PromoStoreError> {
        self.promos
            .write()
            .map_err(|_poisoned| PromoStoreError::Poisoned)
    }
}

impl PromoStore for InMemoryPromoStore {
    fn insert(&self, promo: PromoRecord) -> Result<PromoRecord, PromoStoreError> {
        let mut promos = self.write()?;

        match promos.entry(promo.code.clone()) {
            Entry::Occupied(_) => Err(PromoStoreError::DuplicateKey(promo.code)),
            Entry::Vacant(slot) => Ok(slot.insert(promo).clone()),
        }
    }

    fn find_by_code(&self, code: &str) -> Result<Option<PromoRecord>, PromoStoreError> {
        Ok(self.read()?.get(code).cloned())
    }

    fn find_by_code_or_target(&self, value: &str) -> Result<Vec<PromoRecord>, PromoStoreError> {
        Ok(self
            .read()?
            .values()
            .filter(|promo| promo.matches_code_or_target(value))
            .cloned()
            .collect())
    }

    fn list_all(&self) -> Result<Vec<PromoRecord>, PromoStoreError> {
        Ok(self.read()?.values().cloned().collect())
    }

    fn remove(&self, code: &str) -> Result<usize, PromoStoreError> {
        Ok(usize::from(self.write()?.remove(code).is_some()))
    }

    fn remove_all(&self) -> Result<usize, PromoStoreError> {
        let mut promos = self.write()?;
        let removed = promos.len();

        promos.clear();

        Ok(removed)
    }
}

/// Storage for promo records.
///
/// Each call is atomic with respect to every other call on the same store.
#[automock]
pub trait PromoStore: Send + Sync {
    /// Adds a promo, failing when its code is already taken.
    fn insert(&self, promo: PromoRecord) -> Result<PromoRecord, PromoStoreError>;

    /// Looks up a single promo by code.
    fn find_by_code(&self, code: &str) -> Result<Option<PromoRecord>, PromoStoreError>;

    /// Promos whose code or target equals `value`, ordered by code.
    fn find_by_code_or_target(&self, value: &str) -> Result<Vec<PromoRecord>, PromoStoreError>;

    /// Every promo, ordered ascending by code.
    fn list_all(&self) -> Result<Vec<PromoRecord>, PromoStoreError>;

    /// Removes the promo with `code`, returning how many records went away.
    fn remove(&self, code: &str) -> Result<usize, PromoStoreError>;

    /// Empties the store, returning how many records went away.
    fn remove_all(&self) -> Result<usize, PromoStoreError>;
}
