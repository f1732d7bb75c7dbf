use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::profiles::dtos::{ProfileResponseDto, UpdateProfileDto};
use crate::features::profiles::services::ProfileService;
use crate::shared::types::ApiResponse;

/// Get the caller's profile
#[utoipa::path(
    get,
    path = "/api/me",
    responses(
        (status = 200, description = "Caller's profile", body = ApiResponse<ProfileResponseDto>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "profiles"
)]
pub async fn get_me(
    user: AuthenticatedUser,
    State(service): State<Arc<ProfileService>>,
) -> Result<Json<ApiResponse<ProfileResponseDto>>> {
    let profile = service.get_or_create(&user).await?;
    Ok(Json(ApiResponse::success(Some(profile.into()), None, None)))
}

/// Update the caller's profile (display name, avatar)
#[utoipa::path(
    patch,
    path = "/api/me",
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Updated profile", body = ApiResponse<ProfileResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "profiles"
)]
pub async fn update_me(
    user: AuthenticatedUser,
    State(service): State<Arc<ProfileService>>,
    AppJson(dto): AppJson<UpdateProfileDto>,
) -> Result<Json<ApiResponse<ProfileResponseDto>>> {
    dto.validate()?;

    // Ensure the row exists before updating on a fresh account
    service.get_or_create(&user).await?;
    let profile = service.update(user.id, dto).await?;
    Ok(Json(ApiResponse::success(Some(profile.into()), None, None)))
}
