//! Access-control gate for Axum
//!
//! Two composable stages:
//! - `auth_middleware` authenticates the `Authorization: Bearer <token>`
//!   header and binds an [`AuthenticatedUser`] into the request extensions.
//! - `require_roles` admits the bound user only when their role is listed in
//!   the route's [`RoleGate`]. Membership is exact; no role implies another.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Method, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

use crate::application::CredentialService;
use crate::domain::UserRole;
use crate::infrastructure::crypto::TokenClaims;
use crate::interfaces::http::common::ApiResponse;

const BEARER_PREFIX: &str = "Bearer ";

#[derive(Debug)]
pub enum AuthError {
    MissingToken,
    InvalidToken,
    InsufficientPermissions,
}

/// State of the authentication stage
#[derive(Clone)]
pub struct AuthState {
    pub credentials: Arc<CredentialService>,
}

/// Identity bound to a request after a token was accepted
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub email: String,
    pub role: UserRole,
}

impl From<TokenClaims> for AuthenticatedUser {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.sub,
            email: claims.email,
            role: claims.role,
        }
    }
}

/// Roles accepted by a group of routes.
#[derive(Clone, Copy, Debug)]
pub struct RoleGate {
    allowed: &'static [UserRole],
}

impl RoleGate {
    pub const fn new(allowed: &'static [UserRole]) -> Self {
        Self { allowed }
    }

    pub fn admits(&self, role: UserRole) -> bool {
        self.allowed.contains(&role)
    }
}

pub const ADMIN_ONLY: RoleGate = RoleGate::new(&[UserRole::Admin]);

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix(BEARER_PREFIX))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Bearer-token authentication. Pre-flight `OPTIONS` requests pass through
/// untouched.
pub async fn auth_middleware(
    State(auth_state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    if request.method() == Method::OPTIONS {
        return next.run(request).await;
    }

    let Some(token) = bearer_token(request.headers()) else {
        return auth_error_response(AuthError::MissingToken);
    };

    match auth_state.credentials.validate(token) {
        Ok(claims) => {
            request
                .extensions_mut()
                .insert(AuthenticatedUser::from(claims));
            next.run(request).await
        }
        Err(e) => {
            debug!(reason = %e, "Rejected bearer token");
            auth_error_response(AuthError::InvalidToken)
        }
    }
}

/// Role check. Must run inside `auth_middleware`.
pub async fn require_roles(
    State(gate): State<RoleGate>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if request.method() == Method::OPTIONS {
        return next.run(request).await;
    }

    match request.extensions().get::<AuthenticatedUser>() {
        None => auth_error_response(AuthError::MissingToken),
        Some(user) if !gate.admits(user.role) => {
            debug!(user_id = %user.user_id, role = %user.role, "Role not admitted");
            auth_error_response(AuthError::InsufficientPermissions)
        }
        Some(_) => next.run(request).await,
    }
}

fn auth_error_response(error: AuthError) -> Response {
    let (status, message) = match error {
        AuthError::MissingToken => (StatusCode::UNAUTHORIZED, "authentication required"),
        AuthError::InvalidToken => (StatusCode::UNAUTHORIZED, "invalid or expired token"),
        AuthError::InsufficientPermissions => (StatusCode::FORBIDDEN, "insufficient permissions"),
    };

    (status, Json(ApiResponse::<()>::error(message))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{middleware, routing::get, Extension, Router};
    use chrono::{Duration, Utc};
    use tower::ServiceExt;

    use crate::application::testing::{credentials, jwt_config};
    use crate::domain::User;
    use crate::infrastructure::crypto::jwt::create_token_at;

    fn user(role: UserRole) -> User {
        User {
            id: "u-1".into(),
            name: "Alice".into(),
            email: "a@x.com".into(),
            password_hash: String::new(),
            role,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    async fn whoami(Extension(user): Extension<AuthenticatedUser>) -> String {
        format!("{}:{}", user.user_id, user.role)
    }

    fn app(gate: Option<RoleGate>) -> Router {
        let auth = AuthState {
            credentials: credentials(),
        };
        let mut router = Router::new().route("/protected", get(whoami));
        if let Some(gate) = gate {
            router = router.layer(middleware::from_fn_with_state(gate, require_roles));
        }
        router.layer(middleware::from_fn_with_state(auth, auth_middleware))
    }

    async fn call(app: Router, method: Method, auth: Option<String>) -> (StatusCode, String) {
        let mut req = Request::builder().method(method).uri("/protected");
        if let Some(value) = auth {
            req = req.header(header::AUTHORIZATION, value);
        }
        let resp = app.oneshot(req.body(Body::empty()).unwrap()).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn bearer(role: UserRole) -> String {
        let issued = credentials().issue(&user(role)).unwrap();
        format!("Bearer {}", issued.token)
    }

    #[tokio::test]
    async fn missing_header_is_rejected_before_parsing() {
        let (status, body) = call(app(None), Method::GET, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.contains("authentication required"));
    }

    #[tokio::test]
    async fn non_bearer_scheme_is_rejected() {
        let (status, body) = call(app(None), Method::GET, Some("Basic YTpi".into())).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.contains("authentication required"));
    }

    #[tokio::test]
    async fn garbage_token_is_invalid() {
        let (status, body) = call(app(None), Method::GET, Some("Bearer not.a.jwt".into())).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.contains("invalid or expired token"));
    }

    #[tokio::test]
    async fn expired_token_is_invalid() {
        let token = create_token_at(
            "u-1",
            "a@x.com",
            UserRole::Admin,
            &jwt_config(),
            Utc::now() - Duration::hours(3),
        )
        .unwrap();
        let (status, _) = call(app(None), Method::GET, Some(format!("Bearer {token}"))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn valid_token_binds_identity() {
        let (status, body) = call(app(None), Method::GET, Some(bearer(UserRole::Dispatcher))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "u-1:dispatcher");
    }

    #[tokio::test]
    async fn preflight_bypasses_the_gate() {
        let app = Router::new()
            .route("/protected", axum::routing::options(|| async { "preflight" }))
            .layer(middleware::from_fn_with_state(
                AuthState {
                    credentials: credentials(),
                },
                auth_middleware,
            ));
        let (status, body) = call(app, Method::OPTIONS, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "preflight");
    }

    #[tokio::test]
    async fn role_gate_is_exact_membership() {
        let (status, _) = call(app(Some(ADMIN_ONLY)), Method::GET, Some(bearer(UserRole::Engineer))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _) = call(app(Some(ADMIN_ONLY)), Method::GET, Some(bearer(UserRole::Admin))).await;
        assert_eq!(status, StatusCode::OK);

        const ENGINEERS: RoleGate = RoleGate::new(&[UserRole::Engineer]);
        let (status, _) = call(app(Some(ENGINEERS)), Method::GET, Some(bearer(UserRole::Admin))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[test]
    fn gate_admits_only_listed_roles() {
        assert!(ADMIN_ONLY.admits(UserRole::Admin));
        assert!(!ADMIN_ONLY.admits(UserRole::Engineer));
        assert!(!ADMIN_ONLY.admits(UserRole::Dispatcher));
    }
}
