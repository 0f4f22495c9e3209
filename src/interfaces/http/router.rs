//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::FromRef,
    http::HeaderValue,
    middleware,
    routing::{get, patch, post, put},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{
    AccountAdminService, AuthService, CredentialService, EquipmentService, HistoryService,
};
use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::{ApiResponse, MessageData};
use crate::interfaces::http::middleware::{auth_middleware, require_roles, AuthState, ADMIN_ONLY};
use crate::interfaces::http::modules::{
    auth, equipment, health, history, metrics, substations, users,
};

/// Application services shared by every route group.
#[derive(Clone)]
pub struct ApiServices {
    pub credentials: Arc<CredentialService>,
    pub auth: Arc<AuthService>,
    pub admin: Arc<AccountAdminService>,
    pub equipment: Arc<EquipmentService>,
    pub history: Arc<HistoryService>,
}

impl ApiServices {
    pub fn new(repos: Arc<dyn RepositoryProvider>, credentials: Arc<CredentialService>) -> Self {
        Self {
            auth: Arc::new(AuthService::new(repos.clone(), credentials.clone())),
            admin: Arc::new(AccountAdminService::new(repos.clone(), credentials.clone())),
            equipment: Arc::new(EquipmentService::new(repos.clone())),
            history: Arc::new(HistoryService::new(repos)),
            credentials,
        }
    }
}

/// State for every `/api/v1/rus/*` route. Handlers pull their own state
/// through `FromRef`.
#[derive(Clone)]
pub struct RuUnifiedState {
    pub equipment: Arc<EquipmentService>,
    pub history: Arc<HistoryService>,
}

impl FromRef<RuUnifiedState> for equipment::EquipmentHandlerState {
    fn from_ref(s: &RuUnifiedState) -> Self {
        Self {
            equipment: Arc::clone(&s.equipment),
        }
    }
}

impl FromRef<RuUnifiedState> for history::HistoryHandlerState {
    fn from_ref(s: &RuUnifiedState) -> Self {
        Self {
            history: Arc::clone(&s.history),
        }
    }
}

/// State for every `/api/v1/admin/*` route.
#[derive(Clone)]
pub struct AdminUnifiedState {
    pub admin: Arc<AccountAdminService>,
    pub equipment: Arc<EquipmentService>,
}

impl FromRef<AdminUnifiedState> for users::UserHandlerState {
    fn from_ref(s: &AdminUnifiedState) -> Self {
        Self {
            admin: Arc::clone(&s.admin),
        }
    }
}

impl FromRef<AdminUnifiedState> for equipment::EquipmentHandlerState {
    fn from_ref(s: &AdminUnifiedState) -> Self {
        Self {
            equipment: Arc::clone(&s.equipment),
        }
    }
}

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Session token from /api/v1/auth/login"))
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::register,
        auth::login,
        auth::get_current_user,
        equipment::list_units,
        equipment::get_unit,
        equipment::update_cell_status,
        equipment::update_cell_info,
        equipment::update_unit_status,
        equipment::create_unit,
        equipment::add_cells,
        history::get_history,
        history::add_history,
        substations::get_substation,
        substations::reassign_units,
        users::list_users,
        users::create_user,
        users::update_user,
        users::delete_user,
        users::change_password,
    ),
    components(
        schemas(
            ApiResponse<String>,
            MessageData,
            health::HealthResponse,
            health::ComponentHealth,
            auth::LoginRequest,
            auth::RegisterRequest,
            auth::AuthResponse,
            users::UserDto,
            users::CreateUserRequest,
            users::UpdateUserRequest,
            users::ChangePasswordRequest,
            equipment::RuDto,
            equipment::CellDto,
            equipment::RuDetailsDto,
            equipment::UpdateCellStatusRequest,
            equipment::UpdateCellInfoRequest,
            equipment::UpdateRuStatusRequest,
            equipment::CreateRuRequest,
            equipment::CreateCellRequest,
            equipment::CreateCellsRequest,
            history::AddHistoryRecordRequest,
            history::HistoryRecordDto,
            substations::SubstationDto,
            substations::ReassignUnitsRequest,
            substations::ReassignmentDto,
            substations::ReassignmentItemDto,
            substations::ReassignmentOutcomeDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Authentication", description = "Registration, login and current identity"),
        (name = "Equipment", description = "Switchgear units, cells and their status transitions"),
        (name = "History", description = "Append-only operations ledger per unit"),
        (name = "Substations", description = "Facility overview and unit reassignment"),
        (name = "Users", description = "Account administration (admin only)"),
    ),
    info(
        title = "Switchgear Service API",
        version = "0.1.0",
        description = "Substation switchgear registry, operations history and operator accounts"
    )
)]
pub struct ApiDoc;

/// Empty or `*` allows any origin.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if allowed_origins.is_empty() || allowed_origins.iter().any(|o| o == "*") {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    cors.allow_origin(AllowOrigin::list(origins))
}

/// Create the API router with all routes
pub fn create_api_router(
    services: ApiServices,
    db: DatabaseConnection,
    metrics_handle: PrometheusHandle,
    allowed_origins: &[String],
) -> Router {
    let auth_state = AuthState {
        credentials: services.credentials.clone(),
    };

    // ── Auth ───────────────────────────────────────────────────
    let auth_handler_state = auth::AuthHandlerState {
        auth: services.auth.clone(),
    };

    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .with_state(auth_handler_state.clone());

    let auth_protected_routes = Router::new()
        .route("/me", get(auth::get_current_user))
        .layer(middleware::from_fn_with_state(
            auth_state.clone(),
            auth_middleware,
        ))
        .with_state(auth_handler_state);

    // ── Equipment + history (any authenticated role) ────────────
    let ru_state = RuUnifiedState {
        equipment: services.equipment.clone(),
        history: services.history.clone(),
    };

    let ru_routes = Router::new()
        .route("/", get(equipment::list_units))
        .route("/{ru_id}", get(equipment::get_unit))
        .route("/{ru_id}/status", put(equipment::update_unit_status))
        .route(
            "/{ru_id}/cells/{cell_id}/status",
            put(equipment::update_cell_status),
        )
        .route(
            "/{ru_id}/cells/{cell_id}/info",
            patch(equipment::update_cell_info),
        )
        .route(
            "/{ru_id}/history",
            get(history::get_history).post(history::add_history),
        )
        .layer(middleware::from_fn_with_state(
            auth_state.clone(),
            auth_middleware,
        ))
        .with_state(ru_state);

    // ── Substations ─────────────────────────────────────────────
    let substation_state = substations::SubstationHandlerState {
        equipment: services.equipment.clone(),
    };

    let substation_routes = Router::new()
        .route("/{substation_id}", get(substations::get_substation))
        .with_state(substation_state.clone());

    let substation_protected_routes = Router::new()
        .route("/{substation_id}/rus", put(substations::reassign_units))
        .layer(middleware::from_fn_with_state(
            auth_state.clone(),
            auth_middleware,
        ))
        .with_state(substation_state);

    // ── Admin (role gate runs inside authentication) ────────────
    let admin_state = AdminUnifiedState {
        admin: services.admin.clone(),
        equipment: services.equipment.clone(),
    };

    let admin_routes = Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/{id}",
            put(users::update_user).delete(users::delete_user),
        )
        .route("/users/{id}/password", put(users::change_password))
        .route("/rus", post(equipment::create_unit))
        .route("/rus/{ru_id}/cells", post(equipment::add_cells))
        .layer(middleware::from_fn_with_state(ADMIN_ONLY, require_roles))
        .layer(middleware::from_fn_with_state(auth_state, auth_middleware))
        .with_state(admin_state);

    // ── Operational endpoints ───────────────────────────────────
    let health_state = health::HealthState {
        db,
        started_at: Arc::new(Instant::now()),
    };
    let metrics_state = metrics::MetricsState {
        handle: metrics_handle,
    };

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .route("/health", get(health::health_check).with_state(health_state))
        .route(
            "/metrics",
            get(metrics::prometheus_metrics).with_state(metrics_state),
        )
        .nest("/api/v1/auth", auth_routes)
        .nest("/api/v1/auth", auth_protected_routes)
        .nest("/api/v1/rus", ru_routes)
        .nest("/api/v1/substations", substation_routes)
        .nest("/api/v1/substations", substation_protected_routes)
        .nest("/api/v1/admin", admin_routes)
        .layer(middleware::from_fn(metrics::http_metrics_middleware))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::application::testing::credentials;
    use crate::domain::UserRole;
    use crate::infrastructure::database::memory_db;
    use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;

    const ADMIN_EMAIL: &str = "root@grid.local";
    const ADMIN_PASSWORD: &str = "Admin!234";

    struct TestApp {
        router: Router,
        services: ApiServices,
    }

    async fn test_app() -> TestApp {
        let db = memory_db().await;
        let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
        let services = ApiServices::new(repos, credentials());
        let handle = PrometheusBuilder::new().build_recorder().handle();
        let router = create_api_router(services.clone(), db, handle, &[]);
        TestApp { router, services }
    }

    impl TestApp {
        async fn call(
            &self,
            method: Method,
            uri: &str,
            token: Option<&str>,
            body: Option<Value>,
        ) -> (StatusCode, Value) {
            let mut req = Request::builder().method(method).uri(uri);
            if let Some(token) = token {
                req = req.header(header::AUTHORIZATION, format!("Bearer {token}"));
            }
            let req = match body {
                Some(body) => req
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string())),
                None => req.body(Body::empty()),
            }
            .unwrap();

            let resp = self.router.clone().oneshot(req).await.unwrap();
            let status = resp.status();
            let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
            let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
            (status, json)
        }

        async fn admin_token(&self) -> String {
            self.services
                .admin
                .ensure_default_admin("Root", ADMIN_EMAIL, ADMIN_PASSWORD)
                .await
                .unwrap();
            let (_, body) = self
                .call(
                    Method::POST,
                    "/api/v1/auth/login",
                    None,
                    Some(json!({"email": ADMIN_EMAIL, "password": ADMIN_PASSWORD})),
                )
                .await;
            body["data"]["token"].as_str().unwrap().to_string()
        }

        async fn seed_unit(&self, admin: &str, id: &str) {
            let (status, _) = self
                .call(
                    Method::POST,
                    "/api/v1/admin/rus",
                    Some(admin),
                    Some(json!({"id": id, "name": format!("KRU {id}"), "voltage": "10 kV"})),
                )
                .await;
            assert_eq!(status, StatusCode::CREATED);

            let (status, _) = self
                .call(
                    Method::POST,
                    &format!("/api/v1/admin/rus/{id}/cells"),
                    Some(admin),
                    Some(json!({"cells": [
                        {"number": "1", "name": "Input 1", "type": "INPUT", "status": "ON"},
                        {"number": "2", "name": "Feeder 2", "type": "OUTPUT"}
                    ]})),
                )
                .await;
            assert_eq!(status, StatusCode::CREATED);
        }
    }

    #[tokio::test]
    async fn register_login_and_read_identity() {
        let app = test_app().await;

        let (status, body) = app
            .call(
                Method::POST,
                "/api/v1/auth/register",
                None,
                Some(json!({"name": "Alice", "email": "a@x.com", "password": "Secret!1"})),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["user"]["role"], "engineer");
        assert!(body["data"]["user"].get("password_hash").is_none());

        let (status, body) = app
            .call(
                Method::POST,
                "/api/v1/auth/login",
                None,
                Some(json!({"email": "a@x.com", "password": "Secret!1"})),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        let token = body["data"]["token"].as_str().unwrap().to_string();
        assert_eq!(body["data"]["token_type"], "Bearer");

        let claims = app.services.credentials.validate(&token).unwrap();
        assert_eq!(claims.role, UserRole::Engineer);

        let (status, body) = app.call(Method::GET, "/api/v1/auth/me", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], "Alice");
    }

    #[tokio::test]
    async fn login_failure_does_not_reveal_account_existence() {
        let app = test_app().await;
        app.admin_token().await;

        let (status_known, known) = app
            .call(
                Method::POST,
                "/api/v1/auth/login",
                None,
                Some(json!({"email": ADMIN_EMAIL, "password": "wrong!pw"})),
            )
            .await;
        let (status_unknown, unknown) = app
            .call(
                Method::POST,
                "/api/v1/auth/login",
                None,
                Some(json!({"email": "ghost@x.com", "password": "wrong!pw"})),
            )
            .await;

        assert_eq!(status_known, StatusCode::UNAUTHORIZED);
        assert_eq!(status_unknown, StatusCode::UNAUTHORIZED);
        assert_eq!(known["error"], unknown["error"]);
    }

    #[tokio::test]
    async fn admin_routes_require_admin_role() {
        let app = test_app().await;
        let admin = app.admin_token().await;

        let (status, _) = app.call(Method::GET, "/api/v1/admin/users", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (_, body) = app
            .call(
                Method::POST,
                "/api/v1/auth/register",
                None,
                Some(json!({"name": "Eng", "email": "eng@x.com", "password": "Secret!1"})),
            )
            .await;
        let engineer = body["data"]["token"].as_str().unwrap().to_string();

        let (status, body) = app
            .call(Method::GET, "/api/v1/admin/users", Some(&engineer), None)
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["success"], false);

        let (status, body) = app.call(Method::GET, "/api/v1/admin/users", Some(&admin), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn account_administration_surfaces_policy_and_role_errors() {
        let app = test_app().await;
        let admin = app.admin_token().await;

        let (status, body) = app
            .call(
                Method::POST,
                "/api/v1/admin/users",
                Some(&admin),
                Some(json!({"name": "Bob", "email": "b@x.com", "password": "abc123", "role": "dispatcher"})),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("special character"));

        let (status, _) = app
            .call(
                Method::POST,
                "/api/v1/admin/users",
                Some(&admin),
                Some(json!({"name": "Bob", "email": "b@x.com", "password": "abc123!", "role": "operator"})),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = app
            .call(
                Method::POST,
                "/api/v1/admin/users",
                Some(&admin),
                Some(json!({"name": "Bob", "email": "b@x.com", "password": "abc123!", "role": "dispatcher"})),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        let bob = body["data"]["id"].as_str().unwrap().to_string();

        let (status, _) = app
            .call(
                Method::POST,
                "/api/v1/admin/users",
                Some(&admin),
                Some(json!({"name": "Bobby", "email": "b@x.com", "password": "abc123!", "role": "engineer"})),
            )
            .await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, _) = app
            .call(
                Method::PUT,
                &format!("/api/v1/admin/users/{bob}/password"),
                Some(&admin),
                Some(json!({"newPassword": "short"})),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = app
            .call(Method::DELETE, &format!("/api/v1/admin/users/{bob}"), Some(&admin), None)
            .await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = app
            .call(Method::DELETE, &format!("/api/v1/admin/users/{bob}"), Some(&admin), None)
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn cell_transitions_and_history_round_trip() {
        let app = test_app().await;
        let admin = app.admin_token().await;
        app.seed_unit(&admin, "ru-1").await;
        app.seed_unit(&admin, "ru-2").await;

        let (status, body) = app
            .call(
                Method::PUT,
                "/api/v1/rus/ru-1/cells/2/status",
                Some(&admin),
                Some(json!({"status": "OFF", "isGrounded": true})),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["status"], "OFF");
        assert_eq!(body["data"]["isGrounded"], true);
        assert!(body["data"]["lastOperation"].is_string());
        assert!(body["data"]["lastGroundedOperation"].is_string());

        let (status, _) = app
            .call(
                Method::PUT,
                "/api/v1/rus/ru-1/cells/99/status",
                Some(&admin),
                Some(json!({"status": "OFF"})),
            )
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = app
            .call(
                Method::PATCH,
                "/api/v1/rus/ru-1/cells/1/info",
                Some(&admin),
                Some(json!({"name": "Input 1A", "description": "Rerouted", "voltage": "6 kV"})),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], "Input 1A");
        assert_eq!(body["data"]["status"], "ON");

        let (status, body) = app.call(Method::GET, "/api/v1/rus/ru-1", Some(&admin), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["ruInfo"]["id"], "ru-1");
        assert_eq!(body["data"]["cells"].as_array().unwrap().len(), 2);

        for action in ["Switched OFF", "Grounded"] {
            let (status, _) = app
                .call(
                    Method::POST,
                    "/api/v1/rus/ru-1/history",
                    Some(&admin),
                    Some(json!({
                        "cellNumber": "2",
                        "cellName": "Feeder 2",
                        "action": action,
                        "operator": "Ivanov",
                        "timestamp": "07.03.2024 09:05:01"
                    })),
                )
                .await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (status, body) = app
            .call(Method::GET, "/api/v1/rus/ru-1/history?limit=1", Some(&admin), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        let records = body["data"].as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["action"], "Grounded");
        assert_eq!(records[0]["timestamp"], "07.03.2024 09:05:01");

        let (_, body) = app
            .call(Method::GET, "/api/v1/rus/ru-2/history", Some(&admin), None)
            .await;
        assert!(body["data"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unit_listing_requires_a_token_and_returns_every_unit() {
        let app = test_app().await;
        let admin = app.admin_token().await;
        app.seed_unit(&admin, "ru-1").await;
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        app.seed_unit(&admin, "ru-2").await;

        let (status, _) = app.call(Method::GET, "/api/v1/rus", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, body) = app.call(Method::GET, "/api/v1/rus", Some(&admin), None).await;
        assert_eq!(status, StatusCode::OK);
        let ids: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|u| u["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["ru-2", "ru-1"]);
        assert_eq!(body["data"][0]["name"], "KRU ru-2");
    }

    #[tokio::test]
    async fn history_accepts_a_minimal_record() {
        let app = test_app().await;
        let admin = app.admin_token().await;
        app.seed_unit(&admin, "ru-1").await;

        let (status, body) = app
            .call(
                Method::POST,
                "/api/v1/rus/ru-1/history",
                Some(&admin),
                Some(json!({"cellNumber": "1"})),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert!(body["data"]["timestamp"].is_string());

        let (status, body) = app
            .call(
                Method::POST,
                "/api/v1/rus/ru-1/history",
                Some(&admin),
                Some(json!({"cellNumber": "2", "action": "Switched ON", "timestamp": "07.03.2024, 09:05:01"})),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["timestamp"], "07.03.2024 09:05:01");

        let (status, _) = app
            .call(
                Method::POST,
                "/api/v1/rus/ru-1/history",
                Some(&admin),
                Some(json!({"action": "no cell"})),
            )
            .await;
        assert!(status.is_client_error());
    }

    #[tokio::test]
    async fn substation_view_is_public_and_reassignment_reports_per_unit() {
        let app = test_app().await;
        let admin = app.admin_token().await;
        app.seed_unit(&admin, "ru-1").await;

        let (status, body) = app
            .call(
                Method::PUT,
                "/api/v1/substations/ps-164/rus",
                Some(&admin),
                Some(json!({"ruIds": ["ru-1", "ru-missing"]})),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["count"], 1);
        assert_eq!(body["data"]["items"][0]["outcome"], "updated");
        assert_eq!(body["data"]["items"][1]["outcome"], "not_found");

        let (status, _) = app
            .call(
                Method::PUT,
                "/api/v1/substations/ps-164/rus",
                None,
                Some(json!({"ruIds": ["ru-1"]})),
            )
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, body) = app.call(Method::GET, "/api/v1/substations/ps-164", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["totalRUs"], 1);
        assert_eq!(body["data"]["rus"][0]["substationId"], "ps-164");
    }

    #[tokio::test]
    async fn operational_endpoints_are_open() {
        let app = test_app().await;

        let (status, body) = app.call(Method::GET, "/health", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");

        let (status, body) = app.call(Method::GET, "/api-doc/openapi.json", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/api/v1/rus/{ru_id}/cells/{cell_id}/status"].is_object());
    }
}
