//! State

use std::sync::Arc;

use promos_app::context::AppContext;

use crate::config::DeleteFailureStatus;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) delete_failure_status: DeleteFailureStatus,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, delete_failure_status: DeleteFailureStatus) -> Self {
        Self {
            app,
            delete_failure_status,
        }
    }

    #[must_use]
    pub(crate) fn from_app_context(
        app: AppContext,
        delete_failure_status: DeleteFailureStatus,
    ) -> Arc<Self> {
        Arc::new(Self::new(app, delete_failure_status))
    }
}
