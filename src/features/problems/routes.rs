use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::problems::handlers::{self, ProblemState};
use crate::features::problems::services::{GeocodingService, ProblemService};

/// Public problem routes.
///
/// The caller applies the optional-auth middleware so the listing can
/// carry per-viewer like flags when a token is present.
pub fn public_routes(problem_service: Arc<ProblemService>) -> Router {
    let state = ProblemState { problem_service };

    Router::new()
        .route("/api/problems", get(handlers::problem_handler::list_problems))
        .route(
            "/api/problems/{id}",
            get(handlers::problem_handler::get_problem),
        )
        .with_state(state)
}

/// Problem routes that require an authenticated identity
pub fn protected_routes(
    problem_service: Arc<ProblemService>,
    geocoding_service: Arc<GeocodingService>,
) -> Router {
    let state = ProblemState { problem_service };

    Router::new()
        .route(
            "/api/problems",
            post(handlers::problem_handler::create_problem),
        )
        .route(
            "/api/problems/{id}/like",
            post(handlers::problem_handler::toggle_like),
        )
        .with_state(state)
        .merge(
            Router::new()
                .route(
                    "/api/geocode/reverse",
                    get(handlers::geocoding_handler::reverse_geocode),
                )
                .with_state(geocoding_service),
        )
}
