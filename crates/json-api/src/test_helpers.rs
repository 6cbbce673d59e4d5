//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use promos_app::{
    auth::{AuthService, MockAuthService},
    context::AppContext,
    domain::promos::MockPromosService,
};

use crate::{config::DeleteFailureStatus, state::State};

fn app_context(promos: MockPromosService, auth: Option<Arc<dyn AuthService>>) -> AppContext {
    AppContext {
        promos: Arc::new(promos),
        auth,
    }
}

pub(crate) fn state_with_promos(promos: MockPromosService) -> Arc<State> {
    State::from_app_context(app_context(promos, None), DeleteFailureStatus::NotFound)
}

pub(crate) fn state_with_auth(promos: MockPromosService, auth: MockAuthService) -> Arc<State> {
    State::from_app_context(
        app_context(promos, Some(Arc::new(auth))),
        DeleteFailureStatus::NotFound,
    )
}

pub(crate) fn promos_service(promos: MockPromosService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_promos(promos)))
            .push(route),
    )
}

pub(crate) fn promos_service_with_delete_failure_status(
    promos: MockPromosService,
    delete_failure_status: DeleteFailureStatus,
    route: Router,
) -> Service {
    let state = State::from_app_context(app_context(promos, None), delete_failure_status);

    Service::new(Router::new().hoop(inject(state)).push(route))
}
