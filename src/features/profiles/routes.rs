use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::profiles::handlers::profile_handler;
use crate::features::profiles::services::ProfileService;

/// Create routes for the caller's own profile (require auth middleware)
pub fn routes(profile_service: Arc<ProfileService>) -> Router {
    Router::new()
        .route(
            "/api/me",
            get(profile_handler::get_me).patch(profile_handler::update_me),
        )
        .with_state(profile_service)
}
