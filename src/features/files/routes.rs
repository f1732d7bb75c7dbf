use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::files::handlers::file_handler;
use crate::features::files::services::ImageService;

/// Create routes for image uploads (require auth middleware from caller)
pub fn routes(image_service: Arc<ImageService>) -> Router {
    Router::new()
        .route(
            "/api/images",
            post(file_handler::upload_image).delete(file_handler::delete_image),
        )
        .with_state(image_service)
}
