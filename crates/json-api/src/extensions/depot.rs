//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};

use promos_app::auth::Principal;

/// Helpers for depot state shared between hoops and handlers.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    fn insert_principal(&mut self, principal: Principal);

    fn principal(&self) -> Option<&Principal>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_principal(&mut self, principal: Principal) {
        self.inject(principal);
    }

    fn principal(&self) -> Option<&Principal> {
        self.obtain::<Principal>().ok()
    }
}
