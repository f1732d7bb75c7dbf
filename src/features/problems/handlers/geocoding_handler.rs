use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::core::error::Result;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::problems::dtos::{AddressResponseDto, ReverseGeocodeQuery};
use crate::features::problems::services::GeocodingService;
use crate::shared::types::ApiResponse;

/// Reverse geocode coordinates into a display address
#[utoipa::path(
    get,
    path = "/api/geocode/reverse",
    params(ReverseGeocodeQuery),
    responses(
        (status = 200, description = "Resolved or fallback address", body = ApiResponse<AddressResponseDto>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "geocoding"
)]
pub async fn reverse_geocode(
    _user: AuthenticatedUser,
    State(service): State<Arc<GeocodingService>>,
    Query(query): Query<ReverseGeocodeQuery>,
) -> Result<Json<ApiResponse<AddressResponseDto>>> {
    let address = service.reverse(query.latitude, query.longitude).await;
    Ok(Json(ApiResponse::success(
        Some(AddressResponseDto { address }),
        None,
        None,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::with_test_user;
    use axum::{routing::get, Router};
    use axum_test::TestServer;

    #[tokio::test]
    async fn test_reverse_geocode_falls_back_without_provider() {
        let service = Arc::new(GeocodingService::new(None));
        let router = with_test_user(
            Router::new()
                .route("/api/geocode/reverse", get(reverse_geocode))
                .with_state(service),
        );
        let server = TestServer::new(router).unwrap();

        let response = server
            .get("/api/geocode/reverse")
            .add_query_param("latitude", -23.5505199)
            .add_query_param("longitude", -46.6333094)
            .await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["address"], "-23.550520, -46.633309");
    }
}
