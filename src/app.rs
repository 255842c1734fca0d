use axum::{
    http::{HeaderValue, Method},
    middleware,
    routing::{delete, get, patch, post, put},
    Router,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::config::{AppConfig, SecurityConfig};
use crate::handlers::{elevated, protected, public};
use crate::middleware::{admin_audit_log, jwt_auth_middleware, require_admin};
use crate::services::WeatherSource;

/// Shared handler state. Cloned per request; every field is a cheap handle.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Arc<AppConfig>,
    pub weather: Arc<dyn WeatherSource>,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: AppConfig, weather: Arc<dyn WeatherSource>) -> Self {
        Self {
            pool,
            config: Arc::new(config),
            weather,
        }
    }
}

pub fn app(state: AppState) -> Router {
    let mut router = Router::new()
        // Public
        .merge(public_routes())
        // Protected API (JWT required)
        .merge(protected_routes(state.clone()))
        // Admin API (JWT + admin role + audit log)
        .merge(admin_routes(state.clone()));

    if state.config.security.enable_cors {
        router = router.layer(cors_layer(&state.config.security));
    }
    if state.config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router.with_state(state)
}

fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(public::root))
        .route("/health", get(public::health))
        .route("/auth/signup", post(public::auth::signup_post))
        .route("/auth/signin", post(public::auth::signin_post))
}

fn protected_routes(state: AppState) -> Router<AppState> {
    use protected::{comments, managers, todos, users};

    Router::new()
        .route("/todos", post(todos::todo_create).get(todos::todo_list))
        .route("/todos/:todo_id", get(todos::todo_show))
        .route(
            "/todos/:todo_id/managers",
            post(managers::manager_create).get(managers::manager_list),
        )
        .route("/todos/:todo_id/managers/:manager_id", delete(managers::manager_delete))
        .route(
            "/todos/:todo_id/comments",
            post(comments::comment_create).get(comments::comment_list),
        )
        .route("/users/:user_id", get(users::user_show))
        .route("/users", put(users::user_change_password))
        .route_layer(middleware::from_fn_with_state(state, jwt_auth_middleware))
}

fn admin_routes(state: AppState) -> Router<AppState> {
    use elevated::admin;

    // Layers run bottom-up: jwt, then the admin gate, then the audit log
    Router::new()
        .route("/admin/comments/:comment_id", delete(admin::comment_delete))
        .route("/admin/users/:user_id", patch(admin::user_role_update))
        .route_layer(middleware::from_fn_with_state(state.clone(), admin_audit_log))
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(state, jwt_auth_middleware))
}

fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::PATCH, Method::DELETE])
        .allow_headers(Any)
}
