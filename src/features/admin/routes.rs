use std::sync::Arc;

use axum::{
    routing::{delete, get, patch},
    Router,
};

use crate::features::admin::handlers;
use crate::features::admin::services::AdminService;

/// Create admin routes; nested under /api/admin by the caller.
///
/// Authentication middleware comes from the caller; the admin role check
/// happens per handler against the database.
pub fn routes(admin_service: Arc<AdminService>) -> Router {
    Router::new()
        .route("/stats", get(handlers::get_stats))
        .route(
            "/problems/{id}/status",
            patch(handlers::update_problem_status),
        )
        .route("/problems/{id}", delete(handlers::delete_problem))
        .route("/users", get(handlers::list_users))
        .route("/users/{id}", delete(handlers::delete_user))
        .with_state(admin_service)
}
