use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::debug;
use validator::Validate;

use crate::core::error::AppError;
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::files::dtos::{
    DeleteImageDto, DeleteImageResponseDto, ImageResponseDto, UploadImageDto, MAX_IMAGE_SIZE,
};
use crate::features::files::services::ImageService;
use crate::shared::types::ApiResponse;

/// Upload a report image or avatar
///
/// Accepts multipart/form-data with a single `file` field.
#[utoipa::path(
    post,
    path = "/api/images",
    tag = "images",
    request_body(
        content = UploadImageDto,
        content_type = "multipart/form-data",
        description = "Image upload form",
    ),
    responses(
        (status = 201, description = "Image uploaded", body = ApiResponse<ImageResponseDto>),
        (status = 400, description = "Invalid file or content type"),
        (status = 401, description = "Authentication required"),
        (status = 413, description = "File too large")
    ),
    security(("bearer_auth" = []))
)]
pub async fn upload_image(
    user: AuthenticatedUser,
    State(service): State<Arc<ImageService>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<ImageResponseDto>>), AppError> {
    let mut file_data: Option<Vec<u8>> = None;
    let mut content_type: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "file" => {
                let ct = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());

                let data = field.bytes().await.map_err(|e| {
                    debug!("Failed to read file bytes: {}", e);
                    AppError::BadRequest(format!("Failed to read file data: {}", e))
                })?;

                file_data = Some(data.to_vec());
                content_type = Some(ct);
            }
            _ => {
                debug!("Ignoring unknown field: {}", field_name);
            }
        }
    }

    let file_data =
        file_data.ok_or_else(|| AppError::BadRequest("File is required".to_string()))?;
    let content_type =
        content_type.ok_or_else(|| AppError::BadRequest("Content type is required".to_string()))?;

    if file_data.len() > MAX_IMAGE_SIZE {
        return Err(AppError::BadRequest(format!(
            "File too large. Maximum size is {} bytes ({} MB)",
            MAX_IMAGE_SIZE,
            MAX_IMAGE_SIZE / 1024 / 1024
        )));
    }

    let url = service
        .upload_image(user.id, &content_type, file_data)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(ImageResponseDto { url }),
            None,
            None,
        )),
    ))
}

/// Delete an uploaded image by URL
#[utoipa::path(
    delete,
    path = "/api/images",
    tag = "images",
    request_body = DeleteImageDto,
    responses(
        (status = 200, description = "Image deleted", body = ApiResponse<DeleteImageResponseDto>),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Not the uploader"),
        (status = 404, description = "Image not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_image(
    user: AuthenticatedUser,
    State(service): State<Arc<ImageService>>,
    AppJson(dto): AppJson<DeleteImageDto>,
) -> Result<Json<ApiResponse<DeleteImageResponseDto>>, AppError> {
    dto.validate()?;

    service.delete_by_url(user.id, &dto.url).await?;

    Ok(Json(ApiResponse::success(
        Some(DeleteImageResponseDto { deleted: true }),
        None,
        None,
    )))
}
