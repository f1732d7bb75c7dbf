use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, OptionalUser};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::problems::dtos::{
    CreateProblemDto, LikeResponseDto, ProblemListQuery, ProblemResponseDto,
};
use crate::features::problems::filter::ProblemFilter;
use crate::features::problems::services::ProblemService;
use crate::shared::types::{ApiResponse, Meta};

/// State for problem handlers
#[derive(Clone)]
pub struct ProblemState {
    pub problem_service: Arc<ProblemService>,
}

/// List problems, newest first, with optional in-memory filters
#[utoipa::path(
    get,
    path = "/api/problems",
    params(ProblemListQuery),
    responses(
        (status = 200, description = "Hydrated list of problems", body = ApiResponse<Vec<ProblemResponseDto>>)
    ),
    security((), ("bearer_auth" = [])),
    tag = "problems"
)]
pub async fn list_problems(
    OptionalUser(user): OptionalUser,
    State(state): State<ProblemState>,
    Query(query): Query<ProblemListQuery>,
) -> Result<Json<ApiResponse<Vec<ProblemResponseDto>>>> {
    let viewer = user.map(|u| u.id);
    let views = state.problem_service.list(viewer).await?;

    let filter: ProblemFilter = query.into();
    let filtered = filter.apply(views);

    let total = filtered.len() as i64;
    let dtos: Vec<ProblemResponseDto> = filtered.into_iter().map(|v| v.into()).collect();
    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta { total }),
    )))
}

/// Get a single problem by ID
#[utoipa::path(
    get,
    path = "/api/problems/{id}",
    params(
        ("id" = Uuid, Path, description = "Problem ID")
    ),
    responses(
        (status = 200, description = "Problem found", body = ApiResponse<ProblemResponseDto>),
        (status = 404, description = "Problem not found")
    ),
    security((), ("bearer_auth" = [])),
    tag = "problems"
)]
pub async fn get_problem(
    OptionalUser(user): OptionalUser,
    State(state): State<ProblemState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<ProblemResponseDto>>> {
    let viewer = user.map(|u| u.id);
    let view = state.problem_service.get(id, viewer).await?;
    Ok(Json(ApiResponse::success(Some(view.into()), None, None)))
}

/// Create a new problem report
#[utoipa::path(
    post,
    path = "/api/problems",
    request_body = CreateProblemDto,
    responses(
        (status = 201, description = "Problem created", body = ApiResponse<ProblemResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "problems"
)]
pub async fn create_problem(
    user: AuthenticatedUser,
    State(state): State<ProblemState>,
    AppJson(dto): AppJson<CreateProblemDto>,
) -> Result<(StatusCode, Json<ApiResponse<ProblemResponseDto>>)> {
    dto.validate()?;

    let view = state.problem_service.create(&user, dto.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(view.into()), None, None)),
    ))
}

/// Toggle the caller's like on a problem
#[utoipa::path(
    post,
    path = "/api/problems/{id}/like",
    params(
        ("id" = Uuid, Path, description = "Problem ID")
    ),
    responses(
        (status = 200, description = "Like toggled", body = ApiResponse<LikeResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Problem not found")
    ),
    security(("bearer_auth" = [])),
    tag = "problems"
)]
pub async fn toggle_like(
    user: AuthenticatedUser,
    State(state): State<ProblemState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<LikeResponseDto>>> {
    let view = state.problem_service.toggle_like(id, &user).await?;
    Ok(Json(ApiResponse::success(
        Some(LikeResponseDto {
            liked: view.user_has_liked,
            likes_count: view.problem.likes_count,
        }),
        None,
        None,
    )))
}
