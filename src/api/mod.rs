pub mod routes;
pub mod models;
pub mod errors;
pub mod auth;

use axum::routing::{delete, get, post, put};
use axum::{middleware, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use crate::db::Database;
use crate::directory::{DirectoryService, ReportValidator};
use crate::errors::DirectoryError;

#[derive(Clone)]
pub struct AppState {
    pub service: DirectoryService,
    /// Bearer token required on `/api/admin/*`; `None` leaves them open.
    pub admin_token: Option<String>,
}

impl AppState {
    pub fn new(db: Database, validator: ReportValidator, admin_token: Option<String>) -> Self {
        Self {
            service: DirectoryService::new(db, validator),
            admin_token: admin_token.filter(|t| !t.is_empty()),
        }
    }
}

pub fn create_app_state(
    db_path: &str,
    required_url_domain: &str,
    admin_token: Option<String>,
) -> Result<AppState, DirectoryError> {
    let db = Database::new(db_path)?;
    Ok(AppState::new(db, ReportValidator::new(required_url_domain), admin_token))
}

pub fn build_router(state: AppState) -> Router {
    let admin = Router::new()
        .route("/reports", post(routes::admin::create_report))
        .route("/reports/:id", put(routes::admin::update_report).delete(routes::admin::delete_report))
        .route("/groups", post(routes::admin::create_group))
        .route("/groups/:name", delete(routes::admin::delete_group))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::admin_auth_middleware));

    Router::new()
        .route("/", get(routes::health::root))
        .route("/api/health", get(routes::health::health_check))
        .route("/api/reports", get(routes::reports::list_reports))
        .route("/api/reports/:id", get(routes::reports::get_report))
        .route("/api/groups", get(routes::groups::list_groups))
        .route("/api/stats", get(routes::stats::get_stats))
        .nest("/api/admin", admin)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
