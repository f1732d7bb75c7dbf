use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::admin::dtos::{
    AdminUserDto, DeleteResponseDto, ProblemStatsDto, UpdateProblemStatusDto,
};
use crate::features::admin::services::AdminService;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::problems::dtos::ProblemResponseDto;
use crate::shared::types::{ApiResponse, Meta};

/// Summary counts for the admin dashboard
#[utoipa::path(
    get,
    path = "/api/admin/stats",
    responses(
        (status = 200, description = "Aggregated problem counts", body = ApiResponse<ProblemStatsDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin role required")
    ),
    security(("bearer_auth" = [])),
    tag = "admin"
)]
pub async fn get_stats(
    user: AuthenticatedUser,
    State(service): State<Arc<AdminService>>,
) -> Result<Json<ApiResponse<ProblemStatsDto>>> {
    service.ensure_admin(user.id).await?;

    let stats = service.problem_stats().await?;
    Ok(Json(ApiResponse::success(Some(stats.into()), None, None)))
}

/// Triage a problem's lifecycle status
#[utoipa::path(
    patch,
    path = "/api/admin/problems/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Problem ID")
    ),
    request_body = UpdateProblemStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<ProblemResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Problem not found")
    ),
    security(("bearer_auth" = [])),
    tag = "admin"
)]
pub async fn update_problem_status(
    user: AuthenticatedUser,
    State(service): State<Arc<AdminService>>,
    Path(id): Path<uuid::Uuid>,
    AppJson(dto): AppJson<UpdateProblemStatusDto>,
) -> Result<Json<ApiResponse<ProblemResponseDto>>> {
    service.ensure_admin(user.id).await?;

    let view = service.update_problem_status(id, dto.status).await?;
    Ok(Json(ApiResponse::success(Some(view.into()), None, None)))
}

/// Delete a problem
#[utoipa::path(
    delete,
    path = "/api/admin/problems/{id}",
    params(
        ("id" = Uuid, Path, description = "Problem ID")
    ),
    responses(
        (status = 200, description = "Problem deleted", body = ApiResponse<DeleteResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Problem not found")
    ),
    security(("bearer_auth" = [])),
    tag = "admin"
)]
pub async fn delete_problem(
    user: AuthenticatedUser,
    State(service): State<Arc<AdminService>>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<DeleteResponseDto>>> {
    service.ensure_admin(user.id).await?;

    service.delete_problem(id).await?;
    Ok(Json(ApiResponse::success(
        Some(DeleteResponseDto { deleted: true }),
        None,
        None,
    )))
}

/// List user accounts, newest first
#[utoipa::path(
    get,
    path = "/api/admin/users",
    responses(
        (status = 200, description = "All user profiles", body = ApiResponse<Vec<AdminUserDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin role required")
    ),
    security(("bearer_auth" = [])),
    tag = "admin"
)]
pub async fn list_users(
    user: AuthenticatedUser,
    State(service): State<Arc<AdminService>>,
) -> Result<Json<ApiResponse<Vec<AdminUserDto>>>> {
    service.ensure_admin(user.id).await?;

    let profiles = service.list_users().await?;
    let total = profiles.len() as i64;
    let dtos: Vec<AdminUserDto> = profiles.into_iter().map(|p| p.into()).collect();
    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta { total }),
    )))
}

/// Delete a user account, cascading its reports and likes
#[utoipa::path(
    delete,
    path = "/api/admin/users/{id}",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Account deleted", body = ApiResponse<DeleteResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin role required"),
        (status = 502, description = "Identity provider rejected the deletion")
    ),
    security(("bearer_auth" = [])),
    tag = "admin"
)]
pub async fn delete_user(
    user: AuthenticatedUser,
    State(service): State<Arc<AdminService>>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<DeleteResponseDto>>> {
    service.ensure_admin(user.id).await?;

    service.delete_user(id).await?;
    Ok(Json(ApiResponse::success(
        Some(DeleteResponseDto { deleted: true }),
        None,
        None,
    )))
}
