//! Auth middleware.

use std::sync::Arc;

use salvo::{
    http::header::{AUTHORIZATION, HeaderValue, WWW_AUTHENTICATE},
    prelude::*,
};
use tracing::{debug, error};

use promos_app::auth::{AuthServiceError, Scope};

use crate::{auth::PromoRoute, extensions::*, state::State};

/// Rejects requests whose bearer token does not grant the route's scope.
///
/// Requests pass straight through when authentication is disabled or the
/// route requires no scope.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RequireScope {
    scope: Option<Scope>,
}

impl RequireScope {
    pub(crate) const fn for_route(route: PromoRoute) -> Self {
        Self {
            scope: route.required_scope(),
        }
    }
}

#[salvo::handler]
impl RequireScope {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        let Some(scope) = self.scope else {
            ctrl.call_next(req, depot, res).await;

            return;
        };

        let auth = match depot.obtain::<Arc<State>>() {
            Ok(state) => state.app.auth.clone(),
            Err(_error) => {
                res.render(StatusError::internal_server_error());
                ctrl.skip_rest();

                return;
            }
        };

        let Some(auth) = auth else {
            ctrl.call_next(req, depot, res).await;

            return;
        };

        let Some(token) = extract_bearer_token(req) else {
            reject_unauthorized(res, ctrl, "Missing or invalid Authorization header");

            return;
        };

        let principal = match auth.authenticate_bearer(token).await {
            Ok(principal) => principal,
            Err(AuthServiceError::KeysUnavailable) => {
                error!("signing keys unavailable during token authentication");

                res.render(StatusError::internal_server_error());
                ctrl.skip_rest();

                return;
            }
            Err(source) => {
                debug!("rejected bearer token: {source}");

                reject_unauthorized(res, ctrl, "Invalid bearer token");

                return;
            }
        };

        if !principal.has_scope(scope) {
            debug!(subject = ?principal.subject, %scope, "bearer token lacks required scope");

            if let Ok(challenge) = HeaderValue::from_str(&format!(
                "Bearer error=\"insufficient_scope\", scope=\"{scope}\""
            )) {
                res.headers_mut().insert(WWW_AUTHENTICATE, challenge);
            }

            res.render(StatusError::forbidden().brief(format!("Missing required scope {scope}")));
            ctrl.skip_rest();

            return;
        }

        depot.insert_principal(principal);

        ctrl.call_next(req, depot, res).await;
    }
}

fn reject_unauthorized(res: &mut Response, ctrl: &mut FlowCtrl, brief: &str) {
    res.headers_mut()
        .insert(WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
    res.render(StatusError::unauthorized().brief(brief));
    ctrl.skip_rest();
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.splitn(2, ' ');

    let scheme = parts.next()?;
    let token = parts.next()?.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}

#[cfg(test)]
mod tests {
    use promos_app::{
        auth::{GrantedScopes, MockAuthService, Principal},
        domain::promos::MockPromosService,
    };
    use salvo::{
        affix_state::inject,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use crate::test_helpers::{state_with_auth, state_with_promos};

    use super::*;

    #[salvo::handler]
    async fn echo_subject(depot: &mut Depot, res: &mut Response) {
        let subject = depot
            .principal()
            .and_then(|principal| principal.subject.clone())
            .unwrap_or_else(|| "anonymous".to_string());

        res.render(subject);
    }

    fn principal(scopes: &str) -> Principal {
        Principal {
            subject: Some("client-1".into()),
            scopes: GrantedScopes::from_delimited(scopes),
        }
    }

    fn make_service(auth: MockAuthService, route: PromoRoute) -> Service {
        let router = Router::new()
            .hoop(inject(state_with_auth(MockPromosService::new(), auth)))
            .hoop(RequireScope::for_route(route))
            .push(Router::new().get(echo_subject));

        Service::new(router)
    }

    #[tokio::test]
    async fn test_auth_disabled_passes_through() -> TestResult {
        let router = Router::new()
            .hoop(inject(state_with_promos(MockPromosService::new())))
            .hoop(RequireScope::for_route(PromoRoute::Create))
            .push(Router::new().get(echo_subject));

        let mut res = TestClient::get("http://example.com")
            .send(&Service::new(router))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, "anonymous");

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_authorization_header_returns_401() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer().never();

        let res = TestClient::get("http://example.com")
            .send(&make_service(auth, PromoRoute::List))
            .await;

        let challenge = res
            .headers()
            .get(WWW_AUTHENTICATE)
            .and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));
        assert_eq!(challenge, Some("Bearer"));

        Ok(())
    }

    #[tokio::test]
    async fn test_non_bearer_authorization_header_returns_401() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer().never();

        let res = TestClient::get("http://example.com")
            .add_header(AUTHORIZATION, "Basic abc123", true)
            .send(&make_service(auth, PromoRoute::List))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_token_returns_401() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer()
            .once()
            .withf(|token| token == "abc123")
            .return_once(|_| Err(AuthServiceError::UnknownKey(Some("rotated".into()))));

        let res = TestClient::get("http://example.com")
            .add_header(AUTHORIZATION, "Bearer abc123", true)
            .send(&make_service(auth, PromoRoute::Search))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_unavailable_keys_return_500() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer()
            .once()
            .return_once(|_| Err(AuthServiceError::KeysUnavailable));

        let res = TestClient::get("http://example.com")
            .add_header(AUTHORIZATION, "Bearer abc123", true)
            .send(&make_service(auth, PromoRoute::List))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_scope_returns_403() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer()
            .once()
            .return_once(|_| Ok(principal("promos:read")));

        let res = TestClient::get("http://example.com")
            .add_header(AUTHORIZATION, "Bearer abc123", true)
            .send(&make_service(auth, PromoRoute::Delete))
            .await;

        let challenge = res
            .headers()
            .get(WWW_AUTHENTICATE)
            .and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));
        assert_eq!(
            challenge,
            Some("Bearer error=\"insufficient_scope\", scope=\"promos:delete\"")
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_granted_scope_injects_principal() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer()
            .once()
            .withf(|token| token == "abc123")
            .return_once(|_| Ok(principal("openid promos:create")));

        let mut res = TestClient::get("http://example.com")
            .add_header(AUTHORIZATION, "bearer abc123", true)
            .send(&make_service(auth, PromoRoute::Create))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, "client-1");

        Ok(())
    }

    #[tokio::test]
    async fn test_unguarded_route_skips_token_check() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer().never();

        let res = TestClient::get("http://example.com")
            .send(&make_service(auth, PromoRoute::DeleteAll))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }
}
